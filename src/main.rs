use match_point::prefab_competitors::get_prefab_competitors;
use match_point::{
    MatchConfig, MatchRunner, ScoringCoach, Side, Surface, Weather,
};

fn main() {
    // Args: [seed] [--json]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.iter().any(|arg| arg == "--json");
    let seed: u64 = args
        .iter()
        .find(|arg| *arg != "--json")
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2024);

    let prefabs = get_prefab_competitors();
    let home = prefabs[0].profile.clone();
    let away = prefabs[1].profile.clone();

    let config = MatchConfig::new(Weather::Windy, Surface::Grass);

    let mut runner = MatchRunner::new("exhibition", home, away, config)
        .with_seed(seed)
        .with_coach(Side::Home, Box::new(ScoringCoach::new()))
        .with_coach(Side::Away, Box::new(ScoringCoach::new()));

    let result = match runner.run() {
        Ok(result) => result,
        Err(e) => {
            println!("Error simulating match: {}", e);
            return;
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&result) {
            Ok(encoded) => println!("{}", encoded),
            Err(e) => println!("Error encoding result: {}", e),
        }
        return;
    }

    println!("=== {} (seed {}) ===", result.match_id, seed);
    println!();
    runner.print_transcript();
    println!();

    let names = runner.names();
    println!(
        "Final: {} {} - {} {}",
        names[0], result.set_score[0], result.set_score[1], names[1]
    );
    println!("Winner: {}", names[result.winner.index()]);
    println!();

    for side in [Side::Home, Side::Away] {
        let stats = &result.stats[side.index()];
        println!("{} ({})", names[side.index()], side.label());
        println!("  Points won:     {}", stats.total_points_won);
        println!("  Games won:      {}", stats.games_won);
        println!("  Critical hits:  {}", stats.critical_hits);
        println!("  Trait triggers: {}", stats.trait_triggers);
        println!("  Longest rally:  {} shots", stats.longest_rally);
    }

    println!();
    println!("Turning points: {}", result.turning_points.len());
    for turning_point in result.turning_points.iter().take(5) {
        let record = &result.log[turning_point.point_index];
        println!(
            "  Point {} ({}; importance {})",
            turning_point.point_index,
            record.category.display_name(),
            turning_point.importance
        );
    }
}
