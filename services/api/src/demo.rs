use crate::infra::InMemorySubmissionStore;
use clap::Args;
use mood_tracker::assessment::{
    AssessmentService, Mood, Motivation, ResultView, SystemClipboard, MOTIVATION, QUESTIONS,
};
use mood_tracker::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Mood to select (happy, sad, angry, calm, neutral). Omit to submit without one.
    #[arg(long, value_parser = parse_mood)]
    pub(crate) mood: Option<Mood>,
    /// Answers in questionnaire order; repeat the flag once per question.
    #[arg(long = "answer")]
    pub(crate) answers: Vec<String>,
    /// Free-text journal entry stored with the submission.
    #[arg(long, default_value = "")]
    pub(crate) journal: String,
    /// Page URL used for the share links.
    #[arg(long, default_value = "http://127.0.0.1:3000/")]
    pub(crate) page_url: String,
}

fn parse_mood(raw: &str) -> Result<Mood, String> {
    Mood::from_name(raw).ok_or_else(|| {
        let known: Vec<&str> = Mood::ordered().iter().map(|mood| mood.name()).collect();
        format!("unknown mood '{raw}' (expected one of {})", known.join(", "))
    })
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        mood,
        answers,
        journal,
        page_url,
    } = args;

    let store = Arc::new(InMemorySubmissionStore::default());
    let clipboard = Arc::new(SystemClipboard::new());
    let service = AssessmentService::new(store.clone(), clipboard, page_url);

    service.select_mood(mood);
    for (question, answer) in QUESTIONS.iter().zip(answers) {
        if let Err(err) = service.answer(question, answer) {
            println!("Skipping answer: {err}");
        }
    }
    service.write_journal(journal);

    println!("Mental Health Tracker");
    for question in QUESTIONS {
        let answer = service.view().answers.get(question).to_string();
        let shown = if answer.is_empty() { "(no answer)" } else { answer.as_str() };
        println!("- {question} {shown}");
    }

    let outcome = service.submit();
    if let Some(result) = &outcome.view.result {
        render_result(result);
    }

    render_motivation(&MOTIVATION);

    if outcome.persistence.await.is_err() {
        println!("\nStored submissions: unavailable");
        return Ok(());
    }

    let records = store.records();
    println!("\nStored submissions: {}", records.len());
    for record in &records {
        match serde_json::to_string_pretty(record) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("  Record unavailable: {err}"),
        }
    }

    Ok(())
}

fn render_motivation(motivation: &Motivation) {
    println!("\n{}", motivation.title);
    println!("“{}”", motivation.quote);
    println!("— {}", motivation.author);
    println!("{}", motivation.note);
    println!("{}: {}", motivation.resource_label, motivation.resource_url);
}

fn render_result(result: &ResultView) {
    println!("\n🧠 Based on your answers:");
    println!("{}", result.message);
    println!("Score: {} ({})", result.score, result.tier.label());
    if let Some(line) = &result.mood_line {
        println!("{line}");
    }
    if !result.history.is_empty() {
        println!("📊 Mood History: {}", result.history_trail);
    }
    println!("🔗 Share:");
    println!("- WhatsApp: {}", result.share.whatsapp);
    println!("- Facebook: {}", result.share.facebook);
}
