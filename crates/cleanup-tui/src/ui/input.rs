//! Keyboard and mouse handling for the TUI.
//!
//! Each key event is translated into at most one component action and
//! handled to completion before the next event is read.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use cleanup_core::components::ModalClickTarget;

use crate::app::{step, App, AppState, PledgeField, ReportField, Tab};

use super::render::modal_area;

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match app.state {
        AppState::ShowingHelp => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.state = AppState::Normal;
            }
            return Ok(false);
        }
        AppState::ShowingAlert => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                app.dismiss_alert();
            }
            return Ok(false);
        }
        AppState::ConfirmingQuit => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.state = AppState::Quitting;
                    return Ok(true);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.state = AppState::Normal;
                }
                _ => {}
            }
            return Ok(false);
        }
        AppState::Editing => {
            handle_editing_input(app, key);
            return Ok(false);
        }
        AppState::Normal | AppState::Quitting => {}
    }

    // The open pledge modal takes every key except quit
    if app.pledge_modal_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => app.close_pledge_modal(),
            KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
            _ => {}
        }
        return Ok(false);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return Ok(false);
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return Ok(false);
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return Ok(false);
        }
        KeyCode::Char(c @ '1'..='5') => {
            app.select_tab_index(c as usize - '1' as usize);
            return Ok(false);
        }
        KeyCode::Left if app.current_tab != Tab::Quiz => {
            app.prev_tab();
            return Ok(false);
        }
        KeyCode::Right if app.current_tab != Tab::Quiz => {
            app.next_tab();
            return Ok(false);
        }
        _ => {}
    }

    match app.current_tab {
        Tab::Events => handle_events_input(app, key),
        Tab::Quiz => handle_quiz_input(app, key),
        Tab::Map => handle_map_input(app, key),
        Tab::Report => handle_report_input(app, key),
        Tab::Pledge => handle_pledge_input(app, key),
    }

    Ok(false)
}

/// Handle a mouse event. Only clicks on the open pledge modal matter:
/// inside the dialog is content, anywhere else is the backdrop.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, screen: Rect) {
    if !app.pledge_modal_open() || app.state != AppState::Normal {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let target = if modal_area(screen).contains(Position::new(mouse.column, mouse.row)) {
        ModalClickTarget::Content
    } else {
        ModalClickTarget::Backdrop
    };
    app.click_pledge_modal(target);
}

fn handle_editing_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => app.state = AppState::Normal,
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Char(c) => app.push_input_char(c),
        _ => {}
    }
}

fn handle_events_input(app: &mut App, key: KeyEvent) {
    let count = app.event_card_count();
    match key.code {
        KeyCode::Char('f') => app.cycle_event_filter(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.event_selection = step(app.event_selection, count, false);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.event_selection = step(app.event_selection, count, true);
        }
        KeyCode::Enter => app.sign_up_selected(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_quiz_question(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_quiz_question(true),
        KeyCode::Left | KeyCode::Char('h') => app.move_quiz_option(false),
        KeyCode::Right | KeyCode::Char('l') => app.move_quiz_option(true),
        KeyCode::Char(' ') => app.select_quiz_option(),
        KeyCode::Enter | KeyCode::Char('s') => app.submit_quiz(),
        _ => {}
    }
}

fn handle_map_input(app: &mut App, key: KeyEvent) {
    let count = app.map_len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.map_selection = step(app.map_selection, count, false);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.map_selection = step(app.map_selection, count, true);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_map_point(),
        _ => {}
    }
}

fn handle_report_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => app.report_field = app.report_field.prev(),
        KeyCode::Down | KeyCode::Tab => app.report_field = app.report_field.next(),
        KeyCode::Enter => match app.report_field {
            ReportField::Submit => app.submit_report(),
            ReportField::Location | ReportField::Description => app.state = AppState::Editing,
        },
        _ => {}
    }
}

fn handle_pledge_input(app: &mut App, key: KeyEvent) {
    let interests = app.pledge_interest_count();
    match key.code {
        KeyCode::Up | KeyCode::BackTab => app.pledge_field = app.pledge_field.prev(interests),
        KeyCode::Down | KeyCode::Tab => app.pledge_field = app.pledge_field.next(interests),
        KeyCode::Char(' ') => app.toggle_pledge_interest(),
        KeyCode::Enter => match app.pledge_field {
            PledgeField::Submit => app.submit_pledge(),
            PledgeField::Interest(_) => app.toggle_pledge_interest(),
            field if field.is_text() => app.state = AppState::Editing,
            _ => {}
        },
        _ => {}
    }
}
