use plens_rhetoric::{extract_fragments, RhetoricFragment, RhetoricTag};
use plens_store::Archive;

pub struct FragmentParams<'a> {
    pub archive: &'a Archive,
    pub tag: Option<RhetoricTag>,
    pub speaker: Option<&'a str>,
    pub session: Option<&'a str>,
    /// 0 = unlimited
    pub limit: usize,
    pub json: bool,
}

fn select(params: &FragmentParams<'_>, fragments: Vec<RhetoricFragment>) -> Vec<RhetoricFragment> {
    let limit = if params.limit == 0 {
        usize::MAX
    } else {
        params.limit
    };
    fragments
        .into_iter()
        .filter(|f| params.tag.is_none_or(|t| f.tag == t))
        .filter(|f| params.speaker.is_none_or(|s| f.speaker_name == s))
        .filter(|f| params.session.is_none_or(|s| f.session_id == s))
        .take(limit)
        .collect()
}

/// `plens fragments`
pub fn execute(params: &FragmentParams<'_>) -> anyhow::Result<()> {
    let fragments = select(params, extract_fragments(params.archive));

    if params.json {
        println!("{}", serde_json::to_string_pretty(&fragments)?);
        return Ok(());
    }
    if fragments.is_empty() {
        println!("No fragments.");
        return Ok(());
    }
    println!("Fragments ({}):\n", fragments.len());
    for f in &fragments {
        println!(
            "  {} {} · {} ({}) · {}",
            f.emoji, f.label, f.speaker_name, f.speaker_party, f.session_date
        );
        println!("    \"{}\"", f.text.replace('\n', " "));
        println!("    {}\n", f.intervention_anchor);
    }
    Ok(())
}
