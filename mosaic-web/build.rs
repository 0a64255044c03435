use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Compile `tailwind.css` into `assets/tailwind.css` when the Tailwind CLI is
/// installed. Without it an empty stylesheet keeps `asset!` resolvable and
/// the page falls back to `main.css`.
fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir).join("../mosaic-ui/src").display()
    );

    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Tailwind CSS generation failed");
            eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
        }
        Err(e) => {
            println!("cargo:warning=tailwindcss not available ({e}), run `npm install`");
        }
    }

    if !tailwind_output.exists() {
        if let Err(e) = std::fs::write(&tailwind_output, "") {
            panic!("Failed to create {}: {}", tailwind_output.display(), e);
        }
    }
}
