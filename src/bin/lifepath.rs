//! Print the Life Path and Fixed Number breakdown for one birth date.

use shushu::birthdate::{fixed_number, life_path_number};

fn main() {
    let dob = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: lifepath <dob>   (e.g. 1990-05-15)");
        std::process::exit(2);
    });

    let life = match life_path_number(&dob) {
        Ok(l) => l,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    println!("Life Path Number: {} ({})", life.value, life.archetype.archetype);
    for step in &life.steps {
        println!("  {}", step);
    }
    println!("  {}", life.archetype.traits);

    // Same parsing contract, so this cannot fail once life_path succeeded.
    if let Ok(fixed) = fixed_number(&dob) {
        println!();
        println!("Fixed Number: {}", fixed.value);
        for step in &fixed.steps {
            println!("  {}", step);
        }
        println!("  {}", fixed.description);
    }
}
