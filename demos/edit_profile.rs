use std::env;

use toefl_admin::{
    AdminClient, Attempt, EditPage, LinkForm, ProfileEditor, ProfileId, Section, ToeflLinks,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> toefl_admin::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AdminClient::from_env()?;

    let options = client.get_filter_options().await?;
    println!("Years: {:?}", options.years);
    println!("Months: {:?}", options.months);

    let Some(year) = options.years.last() else {
        println!("No participants yet");
        return Ok(());
    };
    let profiles = client.filter_profiles_by_date(Some(year.as_str()), None).await?;
    println!("Found {} participants in {year}", profiles.len());

    let id = match env::args().nth(1) {
        Some(raw) => raw.parse::<i64>().map_or(ProfileId::from(raw.as_str()), ProfileId::from),
        None => match profiles.first() {
            Some(profile) => profile.id.clone(),
            None => return Ok(()),
        },
    };

    let mut editor = match ProfileEditor::load(&client, &id).await {
        EditPage::Editing(editor) => editor,
        EditPage::Redirect { notice, to } => {
            println!("{}: {} (back to {to})", notice.level, notice.message);
            return Ok(());
        }
    };

    println!("{}", editor.title());
    for attempt in [Attempt::First, Attempt::Second] {
        let scores = editor.scores(attempt);
        println!(
            "{attempt}: L={} S={} R={} total={}",
            scores.value(Section::Listening),
            scores.value(Section::Structure),
            scores.value(Section::Reading),
            scores.total_display(),
        );
    }

    if let Some(reading) = env::args().nth(2) {
        if editor.set_score(Attempt::First, Section::Reading, &reading) {
            if let Ok(outcome) = editor.save(&client).await {
                println!("{}: {}", outcome.notice.level, outcome.notice.message);
            }
        } else {
            println!("Ignoring non-numeric reading score {reading:?}");
        }
    }

    let mut links = LinkForm::<ToeflLinks>::new();
    if let Some(notice) = links.load(&client).await {
        println!("{}: {}", notice.level, notice.message);
    }
    println!("{:#?}", links.record());

    Ok(())
}
