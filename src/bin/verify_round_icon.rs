use round_icons::inspect::inspect_round_icon;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: verify_round_icon <PNG>...");
        return ExitCode::from(2);
    }

    let mut all_round = true;

    for path in &paths {
        match inspect_round_icon(path) {
            Ok(shape) => {
                println!("Checking round icon: {}", path.display());
                println!("  Dimensions: {}x{}", shape.width, shape.height);
                println!("  Center alpha: {}", shape.center_alpha);
                println!("  Corner alpha: {:?}", shape.corner_alpha);

                if shape.is_circular() {
                    println!("✓ Circular mask detected");
                } else {
                    println!("⚠ Icon is not clipped to a circle");
                    all_round = false;
                }
            }
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                all_round = false;
            }
        }
    }

    if all_round {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
