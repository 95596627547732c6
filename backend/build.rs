use std::fs;
use std::io;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Forms</title></head>\n<body><p>The frontend has not been built yet. Run <code>trunk build</code> in <code>frontend/</code>.</p></body>\n</html>\n";

fn main() -> io::Result<()> {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .map_err(|err| io::Error::other(err.to_string()))?;
    }

    // include_dir! needs the directory, and the SPA fallback needs an index.
    let index = embedded_dir.join("index.html");
    if !index.exists() {
        fs::create_dir_all(&embedded_dir)?;
        fs::write(&index, PLACEHOLDER_INDEX)?;
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
