mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::Rng;

use space_invaders::compute::{init_state, tick};
use space_invaders::config::Config;
use space_invaders::entities::GameState;
use space_invaders::input::Controls;
use space_invaders::render::draw_frame;

use display::TerminalCanvas;

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Terminals without key-release events report a held key as one press,
/// a pause of 250-600 ms while the OS waits to start repeating, then a
/// repeat every 30-50 ms.  A freshly pressed key therefore stays "held"
/// for `FIRST_REPEAT_WINDOW` frames (≈ 700 ms at 60 FPS); once repeats
/// are flowing, it expires after `HOLD_WINDOW` frames (100 ms) of silence.
const FIRST_REPEAT_WINDOW: u64 = 42;
const HOLD_WINDOW: u64 = 6;

/// When a key went down and when it was last reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct KeyHold {
    pressed: u64,
    last: u64,
}

impl KeyHold {
    fn live(&self, frame: u64) -> bool {
        let window = if self.last == self.pressed {
            FIRST_REPEAT_WINDOW
        } else {
            HOLD_WINDOW
        };
        frame.saturating_sub(self.last) <= window
    }
}

type KeyMap = HashMap<KeyCode, KeyHold>;

/// Returns true if `key` is still considered down at `frame`.
fn is_held(key_frame: &KeyMap, key: &KeyCode, frame: u64) -> bool {
    key_frame.get(key).map(|k| k.live(frame)).unwrap_or(false)
}

fn any_held(key_frame: &KeyMap, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Record a press or repeat.  Returns true when this is a new keydown
/// rather than the OS repeating a key that is already held.
fn touch(key_frame: &mut KeyMap, code: KeyCode, frame: u64) -> bool {
    if is_held(key_frame, &code, frame) {
        if let Some(hold) = key_frame.get_mut(&code) {
            hold.last = frame;
        }
        false
    } else {
        key_frame.insert(code, KeyHold { pressed: frame, last: frame });
        true
    }
}

/// Drain pending terminal events into `key_frame` and build this tick's
/// `Controls`.  Fire, restart and quit are taken from keydown edges only;
/// auto-repeat of a held key never counts as a new keydown.
fn poll_controls(rx: &mpsc::Receiver<Event>, key_frame: &mut KeyMap, frame: u64) -> Controls {
    let mut controls = Controls::idle();

    while let Ok(event) = rx.try_recv() {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            continue;
        };
        match kind {
            KeyEventKind::Press => {
                if !touch(key_frame, code, frame) {
                    continue;
                }
                match code {
                    KeyCode::Char(' ') => controls.fire = true,
                    KeyCode::Char('r') | KeyCode::Char('R') => controls.restart = true,
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        controls.quit = true;
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        controls.quit = true;
                    }
                    _ => {}
                }
            }
            // Repeat: refresh timestamp so key stays "held"
            KeyEventKind::Repeat => {
                touch(key_frame, code, frame);
            }
            // Release: remove key immediately (keyboard-enhancement path)
            KeyEventKind::Release => {
                key_frame.remove(&code);
            }
        }
    }

    use KeyCode::{Char, Down, Left, Right, Up};
    controls.up = any_held(key_frame, &[Up, Char('w'), Char('W')], frame);
    controls.down = any_held(key_frame, &[Down, Char('s'), Char('S')], frame);
    controls.left = any_held(key_frame, &[Left, Char('a'), Char('A')], frame);
    controls.right = any_held(key_frame, &[Right, Char('d'), Char('D')], frame);
    controls
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs both phases until a quit signal clears `state.running`.  One
/// iteration is one tick; the rest of the frame is slept away.
fn game_loop<W: Write>(
    canvas: &mut TerminalCanvas<W>,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    let frame_len = config.frame_duration();
    let mut key_frame = KeyMap::new();

    while state.running {
        let frame_start = Instant::now();

        let controls = poll_controls(rx, &mut key_frame, state.frame);
        *state = tick(state, &controls, rng);

        draw_frame(canvas, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("space_invaders=info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    log::info!("starting with {:?}", config);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
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
                    break; // receiver dropped, program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: &Config) -> anyhow::Result<()> {
    let mut rng = config.rng();
    let mut canvas = TerminalCanvas::new(out).context("reading terminal size")?;
    let mut state = init_state();

    game_loop(&mut canvas, &mut state, rx, config, &mut rng)?;

    log::info!(
        "exiting after {} frames with score {} at level {}",
        state.frame,
        state.score,
        state.level
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
    }

    /// Feed `events_at(frame)` for each frame and collect the controls.
    fn run_frames(frames: u64, events_at: impl Fn(u64) -> Vec<Event>) -> Vec<Controls> {
        let (tx, rx) = mpsc::channel();
        let mut key_frame = KeyMap::new();
        (0..frames)
            .map(|frame| {
                for ev in events_at(frame) {
                    tx.send(ev).unwrap();
                }
                poll_controls(&rx, &mut key_frame, frame)
            })
            .collect()
    }

    fn shots(controls: &[Controls]) -> usize {
        controls.iter().filter(|c| c.fire).count()
    }

    #[test]
    fn held_space_fires_once() {
        // OS repeat as bare presses: first repeat after 30 frames, then every 2
        let space = KeyCode::Char(' ');
        let controls = run_frames(120, |f| {
            if f == 0 || (f >= 30 && f % 2 == 0) {
                vec![press(space)]
            } else {
                vec![]
            }
        });
        assert_eq!(shots(&controls), 1);
        assert!(controls[0].fire);
    }

    #[test]
    fn rapid_repeats_without_pause_fire_once() {
        let space = KeyCode::Char(' ');
        let controls = run_frames(60, |f| if f % 2 == 0 { vec![press(space)] } else { vec![] });
        assert_eq!(shots(&controls), 1);
    }

    #[test]
    fn release_then_press_fires_again() {
        let space = KeyCode::Char(' ');
        let controls = run_frames(10, |f| match f {
            0 | 6 => vec![press(space)],
            3 => vec![release(space)],
            _ => vec![],
        });
        assert_eq!(shots(&controls), 2);
        assert!(controls[6].fire);
    }

    #[test]
    fn separate_taps_each_fire() {
        let space = KeyCode::Char(' ');
        let gap = FIRST_REPEAT_WINDOW + 1;
        let controls = run_frames(gap * 2 + 1, |f| {
            if f % gap == 0 {
                vec![press(space)]
            } else {
                vec![]
            }
        });
        assert_eq!(shots(&controls), 3);
    }

    #[test]
    fn movement_survives_the_repeat_delay() {
        let right = KeyCode::Char('d');
        let controls = run_frames(40, |f| {
            if f == 0 || (f >= 30 && f % 2 == 0) {
                vec![press(right)]
            } else {
                vec![]
            }
        });
        assert!(controls.iter().all(|c| c.right));
    }

    #[test]
    fn movement_stops_shortly_after_repeats_end() {
        let right = KeyCode::Char('d');
        let controls = run_frames(60, |f| {
            if f == 0 || (30..=40).contains(&f) {
                vec![press(right)]
            } else {
                vec![]
            }
        });
        assert!(controls[40 + HOLD_WINDOW as usize].right);
        assert!(!controls[41 + HOLD_WINDOW as usize].right);
    }

    #[test]
    fn held_restart_key_restarts_once() {
        let r = KeyCode::Char('r');
        let controls = run_frames(60, |f| if f % 2 == 0 { vec![press(r)] } else { vec![] });
        assert_eq!(controls.iter().filter(|c| c.restart).count(), 1);
    }
}
