use tallyboard_core::{
    is_valid_amount, BoardService, FileSnapshotRepository, Projection, SortOrder, SLOT_MAX,
    SLOT_MIN,
};

pub const GRID_COLS: u8 = 10;
pub const GRID_ROWS: u8 = 5;

pub enum InputMode {
    Normal,
    EnteringAmount,
    ConfirmDelete,
    ConfirmClear,
}

pub struct App {
    pub service: BoardService<FileSnapshotRepository>,
    pub selected: u8,
    pub input: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,
    pub sort_order: SortOrder,
    pub entry_index: usize,
}

impl App {
    pub fn new(service: BoardService<FileSnapshotRepository>) -> App {
        App {
            service,
            selected: SLOT_MIN,
            input: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            sort_order: SortOrder::default(),
            entry_index: 0,
        }
    }

    /// Runs the day check; called once per event-loop iteration so a
    /// rollover resets the board even with no key pressed.
    pub fn tick(&mut self) {
        self.service.tick();
    }

    pub fn projection(&self) -> Projection {
        self.service.projection(self.sort_order)
    }

    pub fn toggle_sort(&mut self) {
        self.sort_order = match self.sort_order {
            SortOrder::SlotAscending => SortOrder::TotalDescending,
            SortOrder::TotalDescending => SortOrder::SlotAscending,
        };
    }

    // Grid navigation: slots 1..=50 laid out row-major, 10 per row.

    pub fn move_left(&mut self) {
        if self.selected > SLOT_MIN {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.selected < SLOT_MAX {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > GRID_COLS {
            self.selected -= GRID_COLS;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + GRID_COLS <= SLOT_MAX {
            self.selected += GRID_COLS;
        }
    }

    // Amount entry modal.

    pub fn open_amount_modal(&mut self) {
        self.input_mode = InputMode::EnteringAmount;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn input_is_valid(&self) -> bool {
        is_valid_amount(&self.input)
    }

    /// Confirm action of the entry dialog; does nothing while the buffer
    /// is not a positive number, mirroring a disabled confirm button.
    pub fn submit_amount(&mut self) {
        if !self.input_is_valid() {
            return;
        }
        let raw = self.input.clone();
        self.service.add_amount(self.selected, &raw);
        self.close_modal();
    }

    pub fn close_modal(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
        self.entry_index = 0;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    // Per-entry delete modal.

    pub fn open_delete_modal(&mut self) {
        if !self.service.ledger().slot_amounts(self.selected).is_empty() {
            self.input_mode = InputMode::ConfirmDelete;
            self.entry_index = 0;
        }
    }

    pub fn selected_entries(&self) -> &[f64] {
        self.service.ledger().slot_amounts(self.selected)
    }

    pub fn next_entry(&mut self) {
        let len = self.selected_entries().len();
        if len > 0 {
            self.entry_index = (self.entry_index + 1) % len;
        }
    }

    pub fn previous_entry(&mut self) {
        let len = self.selected_entries().len();
        if len > 0 {
            self.entry_index = (self.entry_index + len - 1) % len;
        }
    }

    pub fn confirm_delete(&mut self) {
        self.service.remove_amount(self.selected, self.entry_index);
        self.close_modal();
    }

    // Clear-all modal.

    pub fn open_clear_modal(&mut self) {
        if !self.service.ledger().is_empty() {
            self.input_mode = InputMode::ConfirmClear;
        }
    }

    pub fn confirm_clear(&mut self) {
        self.service.clear();
        self.close_modal();
    }
}
