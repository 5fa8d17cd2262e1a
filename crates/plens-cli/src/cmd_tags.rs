use plens_aggregate::tag_stats;
use plens_store::Archive;

/// `plens tags`
pub fn execute(archive: &Archive, json: bool) -> anyhow::Result<()> {
    let stats = tag_stats(archive);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    if stats.is_empty() {
        println!("No topic tags.");
        return Ok(());
    }
    println!("{:>6} {:>5}  {:>4}  name", "turns", "pol", "code");
    for s in &stats {
        println!(
            "{:>6} {:>5.1}  {:>4}  {}",
            s.intervention_count, s.avg_polarization, s.tag.code, s.tag.name
        );
    }
    Ok(())
}
