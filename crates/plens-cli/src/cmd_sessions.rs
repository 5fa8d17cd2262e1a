use plens_aggregate::{session_stats, SessionStats};
use plens_core::format::{pol_emoji, pol_label};
use plens_store::Archive;

/// `plens sessions`
pub fn execute(archive: &Archive, json: bool) -> anyhow::Result<()> {
    let stats = session_stats(archive);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    if stats.is_empty() {
        println!("No annotated sessions.");
        return Ok(());
    }
    println!("Sessions ({}):\n", stats.len());
    for s in &stats {
        println!("{}", format_line(s));
    }
    Ok(())
}

fn format_line(s: &SessionStats) -> String {
    let level = (s.avg_polarization > 0).then_some(s.avg_polarization as u8);
    let pol = match pol_label(level) {
        "" => "-".to_string(),
        label => format!("{} {label}", pol_emoji(level)),
    };
    let mut flags = Vec::new();
    if s.has_hate_speech {
        flags.push("hate-speech");
    }
    if s.has_agenda_summaries {
        flags.push("summaries");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };
    format!(
        "  [{}] {}  {}\n    {} interventions, {} agenda items, {} rhetoric tags, polarization {pol}{flags}",
        s.session.date,
        s.session_id,
        s.session.title,
        s.intervention_count,
        s.agenda_item_count,
        s.rhetoric_tag_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use plens_core::Session;

    fn stats(avg: u32, hate: bool) -> SessionStats {
        SessionStats {
            session: Session {
                title: "Plenari de febrer".into(),
                date: "01/02/2023".into(),
                ..Default::default()
            },
            session_id: "2023-02-01_AAA".into(),
            intervention_count: 12,
            agenda_item_count: 3,
            avg_polarization: avg,
            has_hate_speech: hate,
            rhetoric_tag_count: 40,
            has_agenda_summaries: false,
        }
    }

    #[test]
    fn line_shows_polarization_label() {
        let line = format_line(&stats(3, false));
        assert!(line.contains("[01/02/2023] 2023-02-01_AAA  Plenari de febrer"));
        assert!(line.contains("polarization 🟠 Desacord"));
    }

    #[test]
    fn line_without_polarization_and_with_flags() {
        let line = format_line(&stats(0, true));
        assert!(line.contains("polarization -"));
        assert!(line.ends_with("[hate-speech]"));
    }
}
