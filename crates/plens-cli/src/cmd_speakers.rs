use plens_aggregate::{regidor_stats, RegidorStats};
use plens_core::format::party_class;
use plens_store::Archive;

/// `plens speakers`
pub fn execute(archive: &Archive, json: bool) -> anyhow::Result<()> {
    let stats = regidor_stats(archive);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    if stats.is_empty() {
        println!("No council members.");
        return Ok(());
    }
    println!("{:>6} {:>8}  name", "turns", "sessions");
    for s in &stats {
        println!("{}", format_line(s));
    }
    Ok(())
}

fn format_line(s: &RegidorStats) -> String {
    let party = if s.regidor.party.is_empty() {
        String::new()
    } else {
        format!(" ({}, {})", s.regidor.party, party_class(Some(&s.regidor.party)))
    };
    format!(
        "{:>6} {:>8}  {}{party}  /regidors/{}/",
        s.intervention_count, s.session_count, s.regidor.name, s.slug
    )
}
