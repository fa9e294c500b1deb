use todobot_core::ui::SEPARATOR;
use todobot_core::{Session, TaskStore};
use unicode_width::UnicodeWidthStr;

pub enum InputMode {
    Typing,
    /// `bye` was answered; the next key closes the window.
    Finished,
}

pub struct App<S: TaskStore> {
    pub session: Session<S>,
    pub transcript: Vec<String>,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_back: usize,
    pub should_quit: bool,
}

impl<S: TaskStore> App<S> {
    pub fn new(session: Session<S>) -> App<S> {
        let transcript = session.welcome().lines().map(str::to_string).collect();
        App {
            session,
            transcript,
            input: String::new(),
            input_mode: InputMode::Typing,
            cursor_position: 0,
            scroll_back: 0,
            should_quit: false,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor_position);
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self.byte_index(self.cursor_position - 1);
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

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input.chars().count();
    }

    /// Terminal columns between the start of the input and the cursor.
    pub fn cursor_column(&self) -> u16 {
        let width = self.input[..self.byte_index(self.cursor_position)].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = (self.scroll_back + lines).min(self.transcript.len());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }

        let input = std::mem::take(&mut self.input);
        self.cursor_position = 0;
        self.scroll_back = 0;

        let response = self.session.respond(&input);
        self.transcript.push(format!("> {input}"));
        self.transcript
            .extend(response.output.lines().map(str::to_string));
        self.transcript.push(SEPARATOR.to_string());

        if response.exit {
            self.input_mode = InputMode::Finished;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .chars()
            .take(char_index)
            .map(char::len_utf8)
            .sum()
    }
}
