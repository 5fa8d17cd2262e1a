use plens_store::DataPaths;

/// `plens paths`
pub fn execute(paths: &DataPaths) -> anyhow::Result<()> {
    println!("Data dir: {}", paths.root.display());
    let config_state = if paths.config_json.is_file() {
        "found"
    } else {
        "absent, using defaults"
    };
    println!("Config:   {} ({config_state})", paths.config_json.display());
    println!();
    let missing = paths.missing();
    for p in paths.sources() {
        let marker = if missing.contains(&p) { "missing" } else { "ok" };
        println!("  [{marker:>7}] {}", p.display());
    }
    if !missing.is_empty() {
        println!("\n{} of 5 source files missing.", missing.len());
    }
    Ok(())
}
