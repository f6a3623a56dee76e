//! Shared test host for keymaps-core integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use keymaps_core::{ActionError, Host, Notification};

/// Host that records commands and notifications and exposes settable editor state.
#[derive(Default)]
pub struct TestHost {
    pub commands: Mutex<Vec<String>>,
    pub notifications: Mutex<Vec<String>>,
    pub selected: Mutex<Option<u32>>,
    pub editing: Mutex<Option<u32>>,
}

impl TestHost {
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn clear_notifications(&self) {
        self.notifications.lock().unwrap().clear();
    }

    pub fn set_editing(&self, target: Option<u32>) {
        *self.editing.lock().unwrap() = target;
    }

    pub fn set_selected(&self, element: Option<u32>) {
        *self.selected.lock().unwrap() = element;
    }
}

impl Host for TestHost {
    type Element = u32;

    fn run_command(&self, name: &str) -> Result<(), ActionError> {
        self.commands.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn selected_element(&self) -> Option<u32> {
        *self.selected.lock().unwrap()
    }

    fn active_text_edit_target(&self) -> Option<u32> {
        *self.editing.lock().unwrap()
    }

    fn emit(&self, notification: &Notification<'_, Self>) {
        self.notifications.lock().unwrap().push(notification.name());
    }
}
