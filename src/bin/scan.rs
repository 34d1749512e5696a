//! Pair-scan one numeric string and print the matches as JSON lines.

use shushu::pairs::scan;

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: scan <numeric-string>");
        std::process::exit(2);
    });

    let matches = scan(&input);
    for m in &matches {
        let line = serde_json::json!({
            "pair": m.pair,
            "name": m.combination.name,
            "attribute": m.combination.attribute,
            "category": m.combination.category.as_str(),
            "note": m.note,
        });
        println!("{}", line);
    }
    eprintln!("{} match(es)", matches.len());
}
