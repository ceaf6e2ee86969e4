/// Single-line text input. The cursor counts characters, not bytes, so
/// accented names edit correctly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub content: String,
    pub cursor_position: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_content(content: String) -> Self {
        let cursor_position = content.chars().count();
        Self {
            content,
            cursor_position,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, ch);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_count() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    /// Text before the cursor, the character under it (if any) and the rest.
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let at = self.byte_index(self.cursor_position);
        let (before, after) = self.content.split_at(at);
        let mut chars = after.chars();
        let current = chars.next();
        (before, current, chars.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text(InputState),
    Choice { options: Vec<String>, selected: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Text(InputState::new()),
        }
    }

    pub fn text_with(label: &'static str, value: String) -> Self {
        Self {
            label,
            kind: FieldKind::Text(InputState::from_content(value)),
        }
    }

    pub fn choice(label: &'static str, options: Vec<String>) -> Self {
        Self {
            label,
            kind: FieldKind::Choice { options, selected: 0 },
        }
    }

    /// What the field currently shows.
    pub fn display_value(&self) -> &str {
        match &self.kind {
            FieldKind::Text(input) => &input.content,
            FieldKind::Choice { options, selected } => {
                options.get(*selected).map(|s| s.as_str()).unwrap_or("")
            }
        }
    }
}

/// A vertical list of fields with one active at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub active_field: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field: 0,
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active_field = (self.active_field + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.active_field = if self.active_field == 0 {
                self.fields.len() - 1
            } else {
                self.active_field - 1
            };
        }
    }

    fn active_input(&mut self) -> Option<&mut InputState> {
        match self.fields.get_mut(self.active_field).map(|f| &mut f.kind) {
            Some(FieldKind::Text(input)) => Some(input),
            _ => None,
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(input) = self.active_input() {
            input.insert_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.active_input() {
            input.backspace();
        }
    }

    pub fn delete(&mut self) {
        if let Some(input) = self.active_input() {
            input.delete_char();
        }
    }

    pub fn cursor_home(&mut self) {
        if let Some(input) = self.active_input() {
            input.move_cursor_home();
        }
    }

    pub fn cursor_end(&mut self) {
        if let Some(input) = self.active_input() {
            input.move_cursor_end();
        }
    }

    /// Moves the cursor on text fields, cycles the option on choice fields.
    pub fn left(&mut self) {
        match self.fields.get_mut(self.active_field).map(|f| &mut f.kind) {
            Some(FieldKind::Text(input)) => input.move_cursor_left(),
            Some(FieldKind::Choice { options, selected }) if !options.is_empty() => {
                *selected = if *selected == 0 { options.len() - 1 } else { *selected - 1 };
            }
            _ => {}
        }
    }

    pub fn right(&mut self) {
        match self.fields.get_mut(self.active_field).map(|f| &mut f.kind) {
            Some(FieldKind::Text(input)) => input.move_cursor_right(),
            Some(FieldKind::Choice { options, selected }) if !options.is_empty() => {
                *selected = (*selected + 1) % options.len();
            }
            _ => {}
        }
    }

    pub fn text(&self, index: usize) -> &str {
        match self.fields.get(index).map(|f| &f.kind) {
            Some(FieldKind::Text(input)) => &input.content,
            _ => "",
        }
    }

    pub fn selected(&self, index: usize) -> Option<usize> {
        match self.fields.get(index).map(|f| &f.kind) {
            Some(FieldKind::Choice { options, selected }) if !options.is_empty() => Some(*selected),
            _ => None,
        }
    }

    pub fn select_option(&mut self, index: usize, choice: usize) {
        if let Some(FieldKind::Choice { options, selected }) =
            self.fields.get_mut(index).map(|f| &mut f.kind)
        {
            if choice < options.len() {
                *selected = choice;
            }
        }
    }

    /// Replaces a choice field's options, keeping the selection in range.
    pub fn set_options(&mut self, index: usize, new_options: Vec<String>) {
        if let Some(FieldKind::Choice { options, selected }) =
            self.fields.get_mut(index).map(|f| &mut f.kind)
        {
            *options = new_options;
            if *selected >= options.len() {
                *selected = options.len().saturating_sub(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_handles_multibyte_characters() {
        let mut input = InputState::from_content("Águas".to_string());
        assert_eq!(input.cursor_position, 5);

        input.move_cursor_home();
        input.delete_char();
        assert_eq!(input.content, "guas");

        input.insert_char('Á');
        input.move_cursor_end();
        input.backspace();
        assert_eq!(input.content, "Água");
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = InputState::from_content("Ana".to_string());
        input.move_cursor_left();
        assert_eq!(input.split_at_cursor(), ("An", Some('a'), ""));

        input.move_cursor_end();
        assert_eq!(input.split_at_cursor(), ("Ana", None, ""));
    }

    #[test]
    fn test_form_field_cycling_wraps() {
        let mut form = Form::new(vec![FormField::text("A"), FormField::text("B")]);
        form.prev_field();
        assert_eq!(form.active_field, 1);
        form.next_field();
        assert_eq!(form.active_field, 0);
    }

    #[test]
    fn test_choice_field_cycles_and_clamps() {
        let mut form = Form::new(vec![FormField::choice(
            "Categoria",
            vec!["Geral".into(), "Escolar".into(), "Adulto".into()],
        )]);

        form.left();
        assert_eq!(form.selected(0), Some(2));
        form.right();
        assert_eq!(form.selected(0), Some(0));

        form.right();
        form.right();
        form.set_options(0, vec!["Geral".into()]);
        assert_eq!(form.selected(0), Some(0));

        form.set_options(0, Vec::new());
        assert_eq!(form.selected(0), None);
    }

    #[test]
    fn test_typing_ignored_on_choice_field() {
        let mut form = Form::new(vec![FormField::choice("Evento", vec!["X".into()])]);
        form.type_char('a');
        assert_eq!(form.fields[0].display_value(), "X");
    }
}
