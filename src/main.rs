mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use alien_invasion::audio::LogAudio;
use alien_invasion::persistence::FileHighScoreStore;
use alien_invasion::settings::SETTINGS_FILE;
use alien_invasion::{Difficulty, Flow, Game, Intent, SessionState, Settings};

const LOG_FILE: &str = "alien_invasion.log";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode, so log lines go to a file instead of stderr.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(LOG_FILE) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(Difficulty),
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: u32,
    settings: &Settings,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  ALIEN  INVASION  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if high_score > 0 {
        let hs_str = format!("Best Score: {}", high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Select difficulty:"))?;

    let options: &[(&str, Difficulty, Color, &str)] = &[
        ("1", Difficulty::Easy, Color::Green, "Slow fleet, relaxed pace"),
        ("2", Difficulty::Medium, Color::Yellow, "Balanced challenge"),
        ("3", Difficulty::Hard, Color::Red, "Fast and relentless!"),
    ];

    for (i, (key, difficulty, color, desc)) in options.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(10), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{:<8}", display::difficulty_label(*difficulty))))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!(" - {}", desc)))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(format!(
        "[ENTER] Play ({})",
        settings.default_difficulty.trim().to_lowercase()
    )))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 5))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            })) => match code {
                KeyCode::Char('1') => return Ok(MenuResult::Start(Difficulty::Easy)),
                KeyCode::Char('2') => return Ok(MenuResult::Start(Difficulty::Medium)),
                KeyCode::Char('3') => return Ok(MenuResult::Start(Difficulty::Hard)),
                KeyCode::Enter => {
                    let difficulty = settings.default_difficulty()?;
                    return Ok(MenuResult::Start(difficulty));
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(_) => {}
            // Input thread is gone; nothing more can be read.
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key. Each frame the held state of the
/// movement keys is recomputed and turned into `MoveLeft`/`MoveRight`
/// intents whenever it changes, so Space + A/D can be held together.
/// Every Space press or repeat is a `Fire` intent; the projectile cap is
/// the only limit.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<ThreadRng>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let frame_time = game.session().settings().frame_duration();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut held = (false, false);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut intents = Vec::new();
        let mut back_to_menu = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            intents.push(Intent::Quit);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            intents.push(Intent::Quit);
                        }
                        KeyCode::Char(' ') => intents.push(Intent::Fire),
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if game.session().state() == SessionState::GameOver =>
                        {
                            back_to_menu = true;
                        }
                        _ => {}
                    }
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Held movement keys → intents on change ────────────────────────────
        let left = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        let right = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);
        if left != held.0 {
            intents.push(Intent::MoveLeft(left));
        }
        if right != held.1 {
            intents.push(Intent::MoveRight(right));
        }
        held = (left, right);

        if game.tick(intents) == Flow::Quit {
            return Ok(true);
        }
        if back_to_menu {
            game.tick([Intent::MoveLeft(false), Intent::MoveRight(false)]);
            return Ok(false);
        }

        display::render(out, &game.snapshot(), terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();
    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE));

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let store = FileHighScoreStore::new(settings.high_score_path.clone());
    let mut game = Game::new(
        settings,
        thread_rng(),
        Box::new(LogAudio::new()),
        Box::new(store),
    );

    let result = run(&mut out, &mut game, &rx);
    // Covers loop errors too.
    game.shutdown();

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("Exiting after error: {}", err);
        eprintln!("alien_invasion: {}", err);
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    game: &mut Game<ThreadRng>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    loop {
        let high_score = game.session().stats().high_score;
        match show_menu(out, rx, high_score, game.session().settings())? {
            MenuResult::Quit => break,
            MenuResult::Start(difficulty) => {
                game.tick([Intent::StartGame(difficulty)]);
                if game_loop(out, game, rx)? {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    Ok(())
}
