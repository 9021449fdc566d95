use pico_args::Arguments;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{Receiver, Sender};

mod models;

use models::{
    client::GenerateClient,
    editor::{Editor, MIN_CONTENT_CHARS, Theme},
    repl::{GenerationKind, ServerRequest, ServerResponse, UserRequest},
    storage::LocalStorage,
};

/// The input thread is going away, so tell the main loop to quit before
/// handing back the error.
fn stop_input<E>(tx: &Sender<UserRequest>, err: E) -> E {
    let _ = tx.blocking_send(UserRequest::Quit);
    err
}

/// Loop for interacting with the server. Runs one generation at a time
/// and reports each result back, so the main loop (and autosave) never
/// waits on the network.
async fn client(url: String, mut rx: Receiver<ServerRequest>, tx: Sender<ServerResponse>) {
    let client = GenerateClient::new(&url);

    while let Some(ServerRequest::Generate(kind, content)) = rx.recv().await {
        let message = match client.generate(kind, &content).await {
            Ok(text) => ServerResponse::Generated(kind, text),
            Err(err) => ServerResponse::Error(kind, err.to_string()),
        };
        if tx.send(message).await.is_err() {
            break;
        }
    }
}

/// Line-based input loop. Each line is either markdown to append or a
/// `:command`.
fn repl(tx: Sender<UserRequest>) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let request = match rl.readline("> ") {
            Ok(input) => {
                if input.starts_with(':') {
                    let _ = rl.add_history_entry(input.as_str());
                }
                UserRequest::parse(&input)
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => UserRequest::Quit,
            Err(err) => return Err(stop_input(&tx, err)),
        };
        let quit = request == UserRequest::Quit;
        if tx.blocking_send(request).is_err() || quit {
            return Ok(());
        }
    }
}

fn print_preview(editor: &Editor) {
    // Light text on dark for the dark theme; the terminal's own colors
    // otherwise.
    match editor.theme() {
        Theme::Dark => println!("\x1b[97;40m{}\x1b[0m", editor.preview()),
        Theme::Light => println!("{}", editor.preview()),
    }
}

const HELP: &str = "\
Write markdown and generate blog intros and summaries

USAGE:
  quill_client [OPTIONS]

OPTIONS:
  --url       Server URL                  [default: http://127.0.0.1:5000]
  --autosave  Autosave interval (seconds) [default: 10]

FLAGS:
  -h, --help    Print help information

COMMANDS:
  :intro          Generate an introduction and put it at the top
  :summary        Generate a summary
  :clear-summary  Remove the summary
  :save           Save the draft
  :load           Load the saved draft
  :clear          Clear the editor
  :theme          Toggle light/dark theme
  :preview, :p    Show the document
  :help, :h       Show this help
  :quit, :q       Exit
";

struct Args {
    url: String,
    autosave_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        println!("{}", HELP);
        std::process::exit(0);
    }

    let args = Args {
        url: pargs
            .value_from_str("--url")
            .unwrap_or("http://127.0.0.1:5000".into()),
        autosave_secs: pargs.value_from_str("--autosave").unwrap_or(10),
    };
    let Args { url, autosave_secs } = args;

    let mut storage = LocalStorage::open_default()?;
    let mut editor = Editor::restore(&storage);

    // Channels for all the IPC going on.
    let (user_request_sender, mut user_request_receiver): (
        Sender<UserRequest>,
        Receiver<UserRequest>,
    ) = tokio::sync::mpsc::channel(1);
    let (server_request_sender, server_request_receiver): (
        Sender<ServerRequest>,
        Receiver<ServerRequest>,
    ) = tokio::sync::mpsc::channel(1);
    let (server_response_sender, mut server_response_receiver): (
        Sender<ServerResponse>,
        Receiver<ServerResponse>,
    ) = tokio::sync::mpsc::channel(1);

    // Begin background processes.
    thread::spawn(|| repl(user_request_sender));
    tokio::spawn(client(url, server_request_receiver, server_response_sender));

    // The first tick completes immediately, so skip it.
    let mut autosave = tokio::time::interval(Duration::from_secs(autosave_secs.max(1)));
    autosave.tick().await;

    // Main loop.
    let mut generating: Option<GenerationKind> = None;
    loop {
        tokio::select! {
            Some(user_request) = user_request_receiver.recv() => {
                match user_request {
                    UserRequest::Append(line) => editor.append_line(&line),
                    UserRequest::Generate(kind) => {
                        if let Some(active) = generating {
                            println!("Still generating the {active}, hang on.");
                        } else if !editor.is_long_enough() {
                            println!(
                                "Content too short: please enter at least {MIN_CONTENT_CHARS} characters."
                            );
                        } else {
                            generating = Some(kind);
                            println!("Generating {kind}...");
                            let request = ServerRequest::Generate(kind, editor.markdown().to_string());
                            server_request_sender.send(request).await?;
                        }
                    }
                    UserRequest::ClearSummary => editor.clear_summary(),
                    UserRequest::Save => {
                        if editor.markdown().is_empty() {
                            println!("Nothing to save.");
                        } else {
                            match editor.save_draft(&mut storage) {
                                Ok(()) => println!("Draft has been saved."),
                                Err(err) => println!("Saving failed: {err}"),
                            }
                        }
                    }
                    UserRequest::Load => {
                        editor.load_draft(&storage);
                        print_preview(&editor);
                    }
                    UserRequest::Clear => editor.clear(),
                    UserRequest::Theme => {
                        match editor.toggle_theme(&mut storage) {
                            Ok(theme) => println!("Theme set to {theme}."),
                            Err(err) => println!("Changing theme failed: {err}"),
                        }
                    }
                    UserRequest::Preview => print_preview(&editor),
                    UserRequest::Help => println!("{HELP}"),
                    UserRequest::Unknown(command) => {
                        println!("Unknown command :{command}. Try :help.");
                    }
                    UserRequest::Quit => break,
                }
            }
            Some(server_response) = server_response_receiver.recv() => {
                generating = None;
                match server_response {
                    ServerResponse::Generated(GenerationKind::Intro, intro) => {
                        editor.apply_intro(&intro);
                        println!("Introduction generated!");
                    }
                    ServerResponse::Generated(GenerationKind::Summary, summary) => {
                        editor.set_summary(summary);
                        println!("Summary generated!\n\n{}", editor.summary());
                    }
                    // Failures leave the document untouched.
                    ServerResponse::Error(kind, err) => {
                        println!("Generation failed: couldn't generate {kind} ({err}).");
                    }
                }
            }
            _ = autosave.tick() => {
                match editor.autosave(&mut storage) {
                    Ok(true) => println!("Draft auto-saved."),
                    Ok(false) => {}
                    Err(err) => println!("Autosave failed: {err}"),
                }
            }
        }
    }
    Ok(())
}
