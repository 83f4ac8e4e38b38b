use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, Subcommand};

use libtamil99::{
    create_engine_tamil99, encoder, fingers, Config, KeystrokeToken, LayoutTable, SPACE_LABEL,
};

#[derive(Parser)]
#[command(name = "tamil99", about = "Tamil99 typing drill and keystroke tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the keystroke sequence for a Tamil text
    Encode {
        text: String,
        /// Emit tokens as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show per-keystroke finger guidance for a Tamil text
    Keys { text: String },
    /// Interactive typing drill over the built-in lessons
    Drill {
        /// Lesson number (1-based); defaults to the first
        #[arg(long, default_value_t = 1)]
        lesson: usize,
    },
}

/// Built-in drill lessons, easiest first.
const LESSONS: &[&[&str]] = &[
    &["அ", "ஆ", "இ", "ஈ", "உ", "ஊ"],
    &["க", "ச", "ட", "த", "ப", "ற"],
    &["கா", "கி", "கு", "கே", "கோ"],
    &["க்", "ங்", "ச்", "ட்", "ண்"],
    &["அம்மா", "அப்பா", "தமிழ்", "வணக்கம்"],
    &["௧", "௨", "௩", "தமிழ் மொழி"],
];

fn print_tokens(tokens: &[KeystrokeToken]) {
    for (idx, tok) in tokens.iter().enumerate() {
        let (hand, finger) = fingers::finger_for(&tok.label, tok.needs_shift);
        let shift = if tok.needs_shift {
            format!("  (hold {} Shift)", fingers::shift_side_for_key(&tok.label).english())
        } else {
            String::new()
        };
        println!(
            "{:>3}. {:<6} {}{}",
            idx + 1,
            tok.label,
            fingers::english_name(hand, finger),
            shift
        );
    }
}

fn run_drill(lesson_index: usize) {
    let Some(words) = LESSONS.get(lesson_index.saturating_sub(1)) else {
        eprintln!("no lesson {} (1..={})", lesson_index, LESSONS.len());
        return;
    };

    let engine = create_engine_tamil99(Config::default());
    let mut session = engine.new_session();
    let started = Instant::now();

    println!("Tamil99 drill - lesson {lesson_index}");
    println!("For each word, type its key sequence and press Enter.");
    println!("(keys as shown by `tamil99 keys <word>`; '.' for Space; empty line skips)");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for word in words.iter() {
        let mut item = engine.begin_item(word);
        let expected: Vec<String> = item
            .expected_keys()
            .iter()
            .map(|t| t.label.clone())
            .collect();
        println!("word: {}    keys: {}", word, expected.join(" "));
        print!("> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else { break };

        for ch in line.trim_end().chars() {
            let label = if ch == '.' {
                SPACE_LABEL.to_string()
            } else {
                ch.to_string()
            };
            if !item.press_key(&label) {
                println!("  ({label} rejected; expected {:?})", item.next_key().map(|t| t.label.clone()));
            }
        }

        let result = session.submit(
            item.current_text(),
            item.target(),
            started.elapsed().as_secs_f64(),
        );
        println!(
            "  typed: {}   accuracy {:.1}%  net wpm {:.1}  cpm {:.1}  errors {}",
            item.current_text(),
            result.accuracy,
            result.wpm,
            result.cpm,
            result.errors
        );
    }

    println!();
    println!(
        "session: accuracy {:.1}%  net wpm {:.1}  gross wpm {:.1}  errors {}",
        session.aggregate_accuracy(),
        session.aggregate_wpm(),
        session.aggregate_gross_wpm(),
        session.aggregate_errors()
    );
}

fn main() {
    let cli = Cli::parse();
    let table = LayoutTable::tamil99();

    match cli.command {
        Command::Encode { text, json } => {
            let tokens = encoder::encode(&table, &text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&tokens).expect("tokens serialize")
                );
            } else {
                print_tokens(&tokens);
            }
        }
        Command::Keys { text } => {
            let tokens = encoder::encode(&table, &text);
            let labels: Vec<&str> = tokens.iter().map(|t| t.label.as_str()).collect();
            println!("{}", labels.join(" "));
            print_tokens(&tokens);
        }
        Command::Drill { lesson } => run_drill(lesson),
    }
}
