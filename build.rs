use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only the SDL2 front end needs native libraries.
    if env::var_os("CARGO_FEATURE_FRONTEND").is_some() {
        link_sdl2_libraries();
    }
}

fn link_sdl2_libraries() {
    // Check if we're on macOS
    #[cfg(target_os = "macos")]
    {
        // Try to find SDL2 via homebrew
        if let Ok(true) = is_homebrew_available() {
            if let Ok(sdl2_path) = get_homebrew_path("sdl2") {
                println!("cargo:rustc-link-search={}/lib", sdl2_path);
                println!("cargo:rustc-link-lib=SDL2");
            } else {
                println!("cargo:warning=SDL2 not found via homebrew, install it with 'brew install sdl2'");
            }
        } else {
            println!("cargo:warning=Homebrew not found. Install SDL2 manually and set the library path.");
        }
    }

    #[cfg(target_os = "linux")]
    {
        println!("On Linux, install SDL2 with your package manager, e.g. sudo apt-get install libsdl2-dev");
    }

    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure the SDL2 libraries are in your PATH or LIB directory.");
    }
}

#[allow(dead_code)]
fn is_homebrew_available() -> Result<bool, String> {
    match Command::new("brew").arg("--version").output() {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[allow(dead_code)]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                Err(format!("Package {} not found in homebrew", package))
            }
        }
        Err(e) => Err(format!("Failed to execute brew command: {}", e)),
    }
}
