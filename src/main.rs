// Interactive max-pooling demo
// Arrow keys slide the pooling window; each accepted move recomputes the
// windowed maximum and writes it into the output grid.

use crossterm::{
    cursor, event, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

use pool_grid::display::{write_computation, write_input_grid, write_output_grid};
use pool_grid::{NavDirection, PoolConfig, PoolSession};

fn show_help() {
    println!("Usage: pool_grid [command]");
    println!();
    println!("Commands:");
    println!("  (no args)     Start the interactive max-pooling demo");
    println!("  help          Show this help message");
    println!();
    println!("Keys:");
    println!("  Arrow keys    Slide the pooling window");
    println!("  r             Reset the output grid and cursor");
    println!("  n             Regenerate the input grid with new random values");
    println!("  q / Esc       Quit");
    println!();
    println!("The input grid is pooled by a non-overlapping window; each move");
    println!("writes the window maximum into the matching output cell.");
    println!();
    println!("Related:");
    println!("  cargo run --bin sweep_demo    # Headless full-grid sweep");
}

fn draw(stdout: &mut io::Stdout, session: &PoolSession) -> io::Result<()> {
    let config = session.config();
    let cursor_pos = session.cursor().position();
    let origin = session.cursor().window_origin(config.stride());

    queue!(
        stdout,
        cursor::MoveTo(0, 0),
        Clear(ClearType::All),
        SetForegroundColor(Color::Cyan),
        Print(format!(
            "Max Pooling Demo - {}x{} input, {}x{} window, stride {}\r\n",
            config.input_size,
            config.input_size,
            config.window_size,
            config.window_size,
            config.stride()
        )),
        Print("═".repeat(50)),
        Print("\r\n\r\n"),
        ResetColor
    )?;

    queue!(stdout, Print("Input:\r\n"))?;
    write_input_grid(stdout, session.input_grid(), Some((origin, config.window_size)))?;

    queue!(stdout, Print("\r\nOutput:\r\n"))?;
    write_output_grid(stdout, session.output_grid(), Some(cursor_pos))?;

    queue!(stdout, Print("\r\n"))?;
    if let Some(computation) = session.last_computation() {
        write_computation(stdout, computation, config.window_size)?;
    }

    // Directions unavailable at the current cursor position.
    let cursor_state = session.cursor();
    let mut blocked = Vec::new();
    if cursor_state.at_top_edge() {
        blocked.push("up");
    }
    if cursor_state.at_bottom_edge() {
        blocked.push("down");
    }
    if cursor_state.at_left_edge() {
        blocked.push("left");
    }
    if cursor_state.at_right_edge() {
        blocked.push("right");
    }
    if !blocked.is_empty() {
        queue!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("At edge: {} unavailable\r\n", blocked.join(", "))),
            ResetColor
        )?;
    }

    queue!(
        stdout,
        Print("\r\nArrows move · r reset · n randomize · q quit\r\n")
    )?;
    stdout.flush()
}

fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = PoolSession::new(PoolConfig::default())?;
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, Clear(ClearType::All), cursor::Hide)?;

    let result = event_loop(&mut session, &mut stdout);

    execute!(stdout, cursor::Show)?;
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn event_loop(
    session: &mut PoolSession,
    stdout: &mut io::Stdout,
) -> Result<(), Box<dyn std::error::Error>> {
    draw(stdout, session)?;

    loop {
        if let event::Event::Key(key_event) = event::read()? {
            if key_event.kind != event::KeyEventKind::Press {
                continue;
            }

            if key_event.code == event::KeyCode::Char('c')
                && key_event.modifiers.contains(event::KeyModifiers::CONTROL)
            {
                return Ok(());
            }

            let redraw = match key_event.code {
                event::KeyCode::Up => session.handle_nav(NavDirection::Up)?,
                event::KeyCode::Down => session.handle_nav(NavDirection::Down)?,
                event::KeyCode::Left => session.handle_nav(NavDirection::Left)?,
                event::KeyCode::Right => session.handle_nav(NavDirection::Right)?,
                event::KeyCode::Char('r') => {
                    session.reset()?;
                    true
                }
                event::KeyCode::Char('n') => {
                    session.randomize()?;
                    true
                }
                event::KeyCode::Char('q') | event::KeyCode::Esc => return Ok(()),
                _ => false,
            };

            if redraw {
                draw(stdout, session)?;
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("-h") | Some("--help") => {
            show_help();
            Ok(())
        }
        _ => run_interactive(),
    }
}
