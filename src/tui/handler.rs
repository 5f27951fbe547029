//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state: dialogs first, then the search bar, then
//! view-level keys.

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::services::approval;
use crate::services::wizard::WizardStep;
use crate::tui::dialogs::wizard::{ItemField, ItemsFocus};

use super::app::{ActiveDialog, ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Dialogs capture all input while open
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if app.searching {
        return handle_search_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Dashboard);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Materials);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Approvals);
            return Ok(());
        }
        KeyCode::Char('4') => {
            app.switch_view(ActiveView::Technician);
            return Ok(());
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            return Ok(());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            return Ok(());
        }
        _ => {}
    }

    // View-specific keys
    match app.active_view {
        ActiveView::Dashboard => handle_dashboard_key(app, key),
        ActiveView::Materials => handle_materials_key(app, key),
        ActiveView::Approvals => handle_approvals_key(app, key),
        ActiveView::Technician => handle_technician_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if let KeyCode::Char('n') = key.code {
        app.open_dialog(ActiveDialog::Wizard);
    }
    Ok(())
}

fn handle_materials_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('/') => {
            app.searching = true;
        }
        KeyCode::Char('f') => {
            app.low_stock_only = !app.low_stock_only;
            app.clamp_selections();
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.clamp_selections();
        }
        _ => {}
    }
    Ok(())
}

fn handle_approvals_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            if let Some(number) = app.selected_quote_number() {
                app.open_dialog(ActiveDialog::QuoteDetail(number));
            }
        }
        KeyCode::Char('a') => {
            if let Some(number) = app.selected_quote_number() {
                approval::approve(&mut app.quotes, number)?;
                app.set_status(format!("Approved {}", number));
                app.clamp_selections();
            }
        }
        KeyCode::Char('r') => {
            if let Some(number) = app.selected_quote_number() {
                app.open_dialog(ActiveDialog::Reject(number));
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_technician_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            if let Some(number) = app.selected_quote_number() {
                app.open_dialog(ActiveDialog::QuoteDetail(number));
            }
        }
        KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::Wizard);
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys while the search bar is capturing input
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.searching = false;
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.clamp_selections();
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.clamp_selections();
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes
            app.close_dialog();
            Ok(())
        }
        ActiveDialog::QuoteDetail(_) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
            Ok(())
        }
        ActiveDialog::Reject(number) => handle_reject_key(app, key, number),
        ActiveDialog::Wizard => handle_wizard_key(app, key),
        ActiveDialog::None => Ok(()),
    }
}

fn handle_reject_key(
    app: &mut App,
    key: KeyEvent,
    number: crate::models::QuoteNumber,
) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            let reason = app.reject_form.reason_input.value().to_string();
            match approval::reject(&mut app.quotes, number, &reason) {
                Ok(()) => {
                    app.close_dialog();
                    app.set_status(format!("Rejected {}", number));
                    app.clamp_selections();
                }
                Err(err) => {
                    app.reject_form.error_message = Some(err.to_string());
                }
            }
        }
        KeyCode::Backspace => app.reject_form.reason_input.backspace(),
        KeyCode::Left => app.reject_form.reason_input.move_left(),
        KeyCode::Right => app.reject_form.reason_input.move_right(),
        KeyCode::Char(c) => app.reject_form.reason_input.insert(c),
        _ => {}
    }
    Ok(())
}

/// Handle keys inside the wizard dialog
fn handle_wizard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let Some(step) = app.wizard.step() else {
        app.close_dialog();
        return Ok(());
    };

    // Step navigation works from every step
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => {
                try_advance(app, step);
                return Ok(());
            }
            KeyCode::Char('p') => {
                app.wizard_form.cancel_item_edit();
                app.wizard_form.show_material_picker = false;
                app.wizard.retreat();
                return Ok(());
            }
            _ => {}
        }
    }

    if key.code == KeyCode::Esc {
        // Esc unwinds one layer at a time: picker, inline edit, then the
        // whole wizard
        if app.wizard_form.show_material_picker {
            app.wizard_form.show_material_picker = false;
        } else if app.wizard_form.editing_field.is_some() {
            app.wizard_form.cancel_item_edit();
        } else {
            app.wizard.cancel();
            app.close_dialog();
            app.set_status("Quote draft discarded");
        }
        return Ok(());
    }

    match step {
        WizardStep::ClientInfo => handle_wizard_client_key(app, key),
        WizardStep::Items => handle_wizard_items_key(app, key),
        WizardStep::Review => handle_wizard_review_key(app, key),
    }
}

/// Sync form inputs into the draft and advance if the gate allows it
fn try_advance(app: &mut App, step: WizardStep) {
    app.wizard_form.error_message = None;
    match step {
        WizardStep::ClientInfo => {
            app.wizard_form.sync_client_info(&mut app.wizard);
            if app.wizard_form.error_message.is_some() {
                return;
            }
            if app.wizard.can_advance() {
                app.wizard.advance();
            } else {
                app.wizard_form.error_message =
                    Some("Client name and service description are required".to_string());
            }
        }
        WizardStep::Items => {
            if !app.wizard_form.commit_item_edit(&mut app.wizard) {
                return;
            }
            app.wizard_form.sync_costs(&mut app.wizard);
            if app.wizard_form.error_message.is_some() {
                return;
            }
            if app.wizard.can_advance() {
                app.wizard.advance();
            } else {
                app.wizard_form.error_message = Some("Add at least one item".to_string());
            }
        }
        WizardStep::Review => {}
    }
}

fn handle_wizard_client_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab => app.wizard_form.next_client_field(),
        KeyCode::BackTab => app.wizard_form.prev_client_field(),
        KeyCode::Enter => try_advance(app, WizardStep::ClientInfo),
        KeyCode::Backspace => app.wizard_form.focused_client_input().backspace(),
        KeyCode::Delete => app.wizard_form.focused_client_input().delete(),
        KeyCode::Left => app.wizard_form.focused_client_input().move_left(),
        KeyCode::Right => app.wizard_form.focused_client_input().move_right(),
        KeyCode::Char(c) => app.wizard_form.focused_client_input().insert(c),
        _ => {}
    }
    Ok(())
}

fn handle_wizard_items_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Material picker captures input while open
    if app.wizard_form.show_material_picker {
        return handle_material_picker_key(app, key);
    }

    // Inline item edit captures input while open
    if app.wizard_form.editing_field.is_some() {
        match key.code {
            KeyCode::Enter => {
                app.wizard_form.commit_item_edit(&mut app.wizard);
            }
            KeyCode::Tab => {
                // Commit and move to the next column of the same item
                if let Some(field) = app.wizard_form.editing_field {
                    if app.wizard_form.commit_item_edit(&mut app.wizard) {
                        app.wizard_form.begin_item_edit(&app.wizard, field.next());
                    }
                }
            }
            KeyCode::Backspace => app.wizard_form.edit_input.backspace(),
            KeyCode::Left => app.wizard_form.edit_input.move_left(),
            KeyCode::Right => app.wizard_form.edit_input.move_right(),
            KeyCode::Char(c) => app.wizard_form.edit_input.insert(c),
            _ => {}
        }
        return Ok(());
    }

    match app.wizard_form.items_focus {
        ItemsFocus::Table => handle_items_table_key(app, key),
        ItemsFocus::Labor | ItemsFocus::Discount => handle_cost_input_key(app, key),
    }
}

fn handle_items_table_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let item_count = app.wizard.draft().items.len();

    match key.code {
        KeyCode::Tab => app.wizard_form.next_items_focus(),
        KeyCode::Char('j') | KeyCode::Down => {
            if app.wizard_form.selected_item + 1 < item_count {
                app.wizard_form.selected_item += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.wizard_form.selected_item = app.wizard_form.selected_item.saturating_sub(1);
        }
        KeyCode::Char('a') => {
            app.wizard.add_item();
            app.wizard_form.selected_item = app.wizard.draft().items.len() - 1;
            app.wizard_form.error_message = None;
        }
        KeyCode::Char('d') => {
            app.wizard.remove_item(app.wizard_form.selected_item);
            let remaining = app.wizard.draft().items.len();
            app.wizard_form.clamp_selection(remaining);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if item_count > 0 {
                app.wizard_form
                    .begin_item_edit(&app.wizard, ItemField::Description);
            }
        }
        KeyCode::Char('m') => {
            if item_count > 0 {
                app.wizard_form.show_material_picker = true;
                app.wizard_form.picker_index = 0;
            } else {
                app.wizard_form.error_message =
                    Some("Add an item before picking a material".to_string());
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_cost_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let input = match app.wizard_form.items_focus {
        ItemsFocus::Labor => &mut app.wizard_form.labor_input,
        ItemsFocus::Discount => &mut app.wizard_form.discount_input,
        ItemsFocus::Table => return Ok(()),
    };

    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Tab | KeyCode::Enter => {
            app.wizard_form.error_message = None;
            app.wizard_form.sync_costs(&mut app.wizard);
            if app.wizard_form.error_message.is_none() {
                app.wizard_form.next_items_focus();
            }
            return Ok(());
        }
        _ => {}
    }
    Ok(())
}

fn handle_material_picker_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let catalog_len = app.catalog.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.wizard_form.picker_index + 1 < catalog_len {
                app.wizard_form.picker_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.wizard_form.picker_index = app.wizard_form.picker_index.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(material) = app.catalog.all().get(app.wizard_form.picker_index) {
                let id = material.id;
                if !app
                    .wizard
                    .select_material(app.wizard_form.selected_item, id, &app.catalog)
                {
                    app.wizard_form.error_message =
                        Some("Material not found in the catalog".to_string());
                }
            }
            app.wizard_form.show_material_picker = false;
        }
        _ => {}
    }
    Ok(())
}

fn handle_wizard_review_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Enter {
        let today = Local::now().date_naive();
        match app.wizard.submit(&mut app.quotes, today) {
            Ok(quote) => {
                app.close_dialog();
                app.set_status(format!("Submitted {}", quote.number));
                app.selected_quote_index = 0;
            }
            Err(err) => {
                app.wizard_form.error_message = Some(err.to_string());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteStatus;
    use crate::store::{seed, QuoteRepository};

    fn app() -> App {
        App::new(seed::material_catalog(), seed::quote_store())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_switching() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, ActiveView::Approvals);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::Materials);
    }

    #[test]
    fn test_approve_from_approvals_view() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));

        // The only pending quote was QTE-001
        let quote = app
            .quotes
            .get(crate::models::QuoteNumber::new(1))
            .unwrap();
        assert_eq!(quote.status, QuoteStatus::Approved);
        assert!(app.visible_quotes().is_empty());
    }

    #[test]
    fn test_reject_requires_reason_in_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('r'));
        assert!(matches!(app.active_dialog, ActiveDialog::Reject(_)));

        // Enter with a blank reason keeps the dialog open with an error
        press(&mut app, KeyCode::Enter);
        assert!(app.has_dialog());
        assert!(app.reject_form.error_message.is_some());

        type_text(&mut app, "over budget");
        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());

        let quote = app
            .quotes
            .get(crate::models::QuoteNumber::new(1))
            .unwrap();
        assert_eq!(quote.status, QuoteStatus::Rejected);
        assert_eq!(quote.rejection_reason.as_deref(), Some("over budget"));
    }

    #[test]
    fn test_wizard_full_flow_through_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.wizard.is_open());

        // Step 1 blocked while empty
        press_ctrl(&mut app, 'n');
        assert_eq!(app.wizard.step(), Some(WizardStep::ClientInfo));
        assert!(app.wizard_form.error_message.is_some());

        // Fill client name and description
        type_text(&mut app, "ABC Enterprises");
        press(&mut app, KeyCode::Tab); // to tax id
        press(&mut app, KeyCode::Tab); // to description
        type_text(&mut app, "Network install");
        press_ctrl(&mut app, 'n');
        assert_eq!(app.wizard.step(), Some(WizardStep::Items));

        // Step 2 blocked without items
        press_ctrl(&mut app, 'n');
        assert_eq!(app.wizard.step(), Some(WizardStep::Items));

        // Add an item and pick a material from the catalog
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter); // MAT-001
        assert_eq!(
            app.wizard.draft().items[0].description,
            "Cat6 Network Cable - 305m"
        );

        press_ctrl(&mut app, 'n');
        assert_eq!(app.wizard.step(), Some(WizardStep::Review));

        // Submit
        let before = app.quotes.list().len();
        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert!(!app.wizard.is_open());
        assert_eq!(app.quotes.list().len(), before + 1);
        assert_eq!(app.quotes.list()[0].status, QuoteStatus::Pending);
    }

    #[test]
    fn test_wizard_esc_discards_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "ABC");
        press(&mut app, KeyCode::Esc);

        assert!(!app.wizard.is_open());
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_search_filters_materials() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        assert!(app.searching);

        type_text(&mut app, "cat6");
        press(&mut app, KeyCode::Enter);
        assert!(!app.searching);
        // Cable and connectors both mention Cat6
        assert_eq!(app.visible_materials().len(), 2);
    }

    #[test]
    fn test_low_stock_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('f'));
        assert!(app.low_stock_only);
        assert_eq!(app.visible_materials().len(), 2);
    }
}
