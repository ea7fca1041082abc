//! Demo of gasket generation on a few classic seed quadruples

use apollon::apollonian_gasket;

fn main() {
    println!("=== APOLLON Gasket Demo ===\n");

    for (b1, b2, b3) in [(2.0, 2.0, 2.0), (2.0, 3.0, 3.0), (2.0, 4.0, 7.0)] {
        let gasket = apollonian_gasket(0.01, b1, b2, b3).unwrap();
        println!(
            "Seed bends ({}, {}, {}): {} circles",
            b1,
            b2,
            b3,
            gasket.len()
        );

        let smallest = gasket.circles[4..]
            .iter()
            .map(|c| c.radius())
            .fold(f64::INFINITY, f64::min);
        println!("  smallest surviving radius: {:.4}", smallest);

        for circle in gasket.circles.iter().take(5) {
            let center = circle.center();
            println!(
                "  bend {:9.4}  center ({:7.4}, {:7.4})  radius {:.4}",
                circle.bend(),
                center.x,
                center.y,
                circle.radius()
            );
        }
        println!();
    }
}
