use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use study_gen_core::io::{get_filename, read_notes};
use study_gen_core::study::export::StudySet;
use study_gen_core::study::glossary;
use study_gen_core::study::grading::Gradable;
use study_gen_core::study::session::StudySession;
use study_gen_core::study::SAMPLE_NOTES;
use study_gen_core::{preview, GenerationConfig, Preview};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum QuizMode {
    Flashcards,
    Mcq,
    Written,
}

/// Generates flashcards, questions and written prompts from plain-text notes
#[derive(Parser, Debug)]
#[command(name = "study-gen", version)]
struct Args {
    /// Notes file; the built-in photosynthesis sample is used when omitted
    #[arg(long)]
    notes: Option<PathBuf>,

    /// Maximum number of items per kind (1 to 50)
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Generation seed; a random one is drawn when omitted
    #[arg(long)]
    seed: Option<i64>,

    /// Write the generated set next to the notes file (`<notes>.json`)
    #[arg(long)]
    export: bool,

    /// Write the generated set to this path (`.json`, or `.bin` for the compact format)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Treat every line as `Term — Definition`: the term is asked, the definition answers it
    #[arg(long)]
    glossary: bool,

    /// Run an interactive quiz on the generated items
    #[arg(long, value_enum)]
    quiz: Option<QuizMode>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (title, notes) = match &args.notes {
        Some(path) => (get_filename(path)?, read_notes(path)?),
        None => ("sample".to_owned(), SAMPLE_NOTES.to_owned()),
    };

    let config = match args.seed {
        Some(seed) => GenerationConfig::new(args.count, seed)?,
        None => GenerationConfig::with_random_seed(args.count)?,
    };
    log::info!("Generating from '{}' (count {}, seed {})", title, config.count(), config.seed());

    let generated = if args.glossary {
        glossary::preview(&notes, &config)
    } else {
        preview(&notes, &config)
    };
    if generated.is_empty() {
        println!("Nothing to study in these notes.");
        return Ok(());
    }

    let output = match (&args.output, &args.notes) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(path)) if args.export => Some(StudySet::export_path(path)?),
        (None, None) if args.export => Some(PathBuf::from("sample.json")),
        _ => None,
    };
    if let Some(path) = output {
        StudySet::new(&notes, generated.clone()).save(&path)?;
        println!("Saved to {}", path.display());
    }

    match args.quiz {
        Some(mode) => run_quiz(mode, generated)?,
        None => print_preview(&generated),
    }

    Ok(())
}

fn print_preview(generated: &Preview) {
    println!("== Flashcards ({}) ==", generated.flashcards.len());
    for card in &generated.flashcards {
        println!("- {}\n    {}", card.front, card.back);
    }

    println!("\n== Multiple choice ({}) ==", generated.mcq.len());
    for (i, item) in generated.mcq.iter().enumerate() {
        println!("{}. {}", i + 1, item.stem);
        for (letter, choice) in ('A'..).zip(&item.choices) {
            println!("    {}) {}", letter, choice);
        }
    }

    println!("\n== Written ({}) ==", generated.written.len());
    for (i, item) in generated.written.iter().enumerate() {
        println!("{}. {}", i + 1, item.prompt);
    }
}

fn run_quiz(mode: QuizMode, generated: Preview) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    match mode {
        QuizMode::Flashcards => {
            let mut session = StudySession::new(generated.flashcards);
            loop {
                while let Some(card) = session.current().cloned() {
                    let (position, total) = session.progress();
                    println!("[{}/{}] {}", position, total, card.front);
                    prompt("Press enter to flip")?;
                    if lines.next().transpose()?.is_none() {
                        return Ok(());
                    }
                    println!("    {}", card.back);
                    prompt("Did you know it? [y/N]")?;
                    let Some(reply) = lines.next().transpose()? else {
                        return Ok(());
                    };
                    session.record(reply.trim().eq_ignore_ascii_case("y"));
                }
                if !finish(&mut session, &mut lines)? {
                    return Ok(());
                }
            }
        }
        QuizMode::Mcq => {
            let mut session = StudySession::new(generated.mcq);
            loop {
                while let Some(item) = session.current().cloned() {
                    let (position, total) = session.progress();
                    println!("[{}/{}] {}", position, total, item.stem);
                    for (letter, choice) in ('A'..).zip(&item.choices) {
                        println!("    {}) {}", letter, choice);
                    }
                    prompt("Answer (letter or text)")?;
                    let Some(reply) = lines.next().transpose()? else {
                        return Ok(());
                    };
                    let response = choice_for(&item.choices, reply.trim()).unwrap_or(reply.trim());
                    report(session.answer(response), item.expected());
                }
                if !finish(&mut session, &mut lines)? {
                    return Ok(());
                }
            }
        }
        QuizMode::Written => {
            let mut session = StudySession::new(generated.written);
            loop {
                while let Some(item) = session.current().cloned() {
                    let (position, total) = session.progress();
                    println!("[{}/{}] {}", position, total, item.prompt);
                    prompt("Your answer")?;
                    let Some(reply) = lines.next().transpose()? else {
                        return Ok(());
                    };
                    report(session.answer(&reply), item.expected());
                }
                if !finish(&mut session, &mut lines)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Maps a letter reply (`b`, `B`) onto the matching choice.
fn choice_for<'a>(choices: &'a [String], reply: &str) -> Option<&'a str> {
    let mut chars = reply.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }
    let index = (letter as u8 - b'A') as usize;
    choices.get(index).map(String::as_str)
}

fn report(outcome: Option<bool>, expected: &str) {
    match outcome {
        Some(true) => println!("    Correct!"),
        Some(false) => println!("    Expected: {}", expected),
        None => {}
    }
}

fn prompt(label: &str) -> io::Result<()> {
    print!("{}: ", label);
    io::stdout().flush()
}

/// Prints the score and offers a retry of the misses.
///
/// Returns `true` when a new run was started.
fn finish<T, I>(session: &mut StudySession<T>, lines: &mut I) -> io::Result<bool>
where
    T: Clone,
    I: Iterator<Item = io::Result<String>>,
{
    let (_, total) = session.progress();
    let missed = session.wrong().len();
    println!("\nScore: {}/{}", total - missed, total);
    if missed == 0 {
        return Ok(false);
    }
    prompt("Retry the missed ones? [y/N]")?;
    let retry = lines
        .next()
        .transpose()?
        .is_some_and(|reply| reply.trim().eq_ignore_ascii_case("y"));
    Ok(retry && session.retry_wrong())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_for() {
        let choices = vec!["light".to_owned(), "glucose".to_owned(), "stomata".to_owned()];
        assert_eq!(choice_for(&choices, "b"), Some("glucose"));
        assert_eq!(choice_for(&choices, "A"), Some("light"));
        assert_eq!(choice_for(&choices, "d"), None);
        assert_eq!(choice_for(&choices, "glucose"), None);
        assert_eq!(choice_for(&choices, ""), None);
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["study-gen", "--count", "5", "--seed", "3", "--quiz", "mcq"]);
        assert_eq!(args.count, 5);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.quiz, Some(QuizMode::Mcq));
        assert!(args.notes.is_none());
        assert!(!args.glossary);

        let args = Args::parse_from(["study-gen", "--glossary", "--quiz", "written"]);
        assert!(args.glossary);
        assert_eq!(args.quiz, Some(QuizMode::Written));
    }
}
