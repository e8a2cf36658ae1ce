pub mod common;


#[cfg(test)]
mod test_invariants;


#[cfg(test)]
mod test_tiebreak;
