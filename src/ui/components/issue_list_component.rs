use crate::dispatcher::IssueAction;
use crate::icons::IconService;
use crate::issues::{IssueRecord, IssueStatus, Priority};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Key bindings of the per-issue actions, in display order
const ISSUE_KEYS: [(char, IssueAction, &str); 5] = [
    ('p', IssueAction::SetPriority, "Priority"),
    ('t', IssueAction::SetTechLevel, "Tech level"),
    ('s', IssueAction::StartIssue, "Start"),
    ('c', IssueAction::CompleteIssue, "Complete"),
    ('v', IssueAction::ViewHistory, "History"),
];

/// Filtered issue list with the "Showing X of Y issues" summary line
pub struct IssueListComponent {
    pub issues: Vec<IssueRecord>,
    pub summary: String,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    /// Actions on the selected issue that are still soft-guarded
    pub guarded_actions: Vec<IssueAction>,
    pub loading: bool,
    scrollbar: ScrollbarHelper,
}

impl Default for IssueListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueListComponent {
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            summary: String::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            guarded_actions: Vec::new(),
            loading: true,
            scrollbar: ScrollbarHelper::new(),
        }
    }

    /// Replace the visible issues, keeping the selection on the same issue when it is still shown
    pub fn update_data(&mut self, issues: Vec<IssueRecord>, summary: String) {
        let selected_id = self.selected_issue().map(|issue| issue.report_id);
        self.issues = issues;
        self.summary = summary;
        if let Some(id) = selected_id {
            if let Some(index) = self.issues.iter().position(|issue| issue.report_id == id) {
                self.selected_index = index;
            }
        }
        self.update_list_state();
    }

    pub fn selected_issue(&self) -> Option<&IssueRecord> {
        self.issues.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.issues.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.issues.len() {
                self.selected_index = self.issues.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn create_issue_item(&self, issue: &IssueRecord) -> ListItem<'static> {
        let status_color = match issue.status {
            IssueStatus::Pending => Color::Yellow,
            IssueStatus::InProgress => Color::Cyan,
            IssueStatus::Completed => Color::Green,
        };
        let priority_color = match issue.priority {
            Some(Priority::High) => Color::Red,
            Some(Priority::Medium) => Color::Yellow,
            Some(Priority::Low) => Color::Blue,
            None => Color::DarkGray,
        };

        let mut spans = vec![
            Span::styled(
                format!("{} ", self.icons.status(issue.status)),
                Style::default().fg(status_color),
            ),
            Span::styled(format!("#{:<5} ", issue.report_id), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} ", self.icons.priority(issue.priority)),
                Style::default().fg(priority_color),
            ),
            Span::styled(
                format!("{} {}", self.icons.project(), issue.project),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format!("[{}]", issue.status), Style::default().fg(status_color)),
        ];
        if let Some(priority) = issue.priority {
            spans.push(Span::styled(format!(" [{}]", priority), Style::default().fg(priority_color)));
        }
        if let Some(level) = issue.tech_level {
            spans.push(Span::styled(format!(" [{}]", level), Style::default().fg(Color::Magenta)));
        }
        if issue.has_images() {
            spans.push(Span::styled(
                format!(" {} {}", self.icons.images(), issue.image_filenames().len()),
                Style::default().fg(Color::Blue),
            ));
        }

        let mut description = issue.description.lines().next().unwrap_or_default().to_string();
        if description.chars().count() > 100 {
            description = description.chars().take(97).collect::<String>() + "...";
        }
        let detail = Line::from(vec![
            Span::raw("        "),
            Span::styled(
                format!("{} {} ", self.icons.contact(), issue.name),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(description, Style::default().fg(Color::DarkGray)),
        ]);

        ListItem::new(vec![Line::from(spans), detail])
    }

    fn action_hints(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action, label) in ISSUE_KEYS {
            let dimmed = self.guarded_actions.contains(&action);
            let (key_style, label_style) = if dimmed {
                (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
            } else {
                (
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Gray),
                )
            };
            spans.push(Span::styled(key.to_string(), key_style));
            spans.push(Span::styled(format!(" {}  ", label), label_style));
        }
        spans.push(Span::styled("i", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(" Images", Style::default().fg(Color::Gray)));
        Line::from(spans)
    }
}

impl Component for IssueListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => return Action::PreviousIssue,
            KeyCode::Down | KeyCode::Char('j') => return Action::NextIssue,
            _ => {}
        }

        let Some(issue) = self.selected_issue() else {
            return Action::None;
        };
        let issue_id = issue.report_id;

        match key.code {
            KeyCode::Char('i') => Action::ShowImages(issue_id),
            KeyCode::Char(c) => ISSUE_KEYS
                .iter()
                .find(|(key, _, _)| *key == c)
                .map_or(Action::None, |(_, action, _)| Action::Dispatch {
                    action: *action,
                    issue_id,
                }),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextIssue => {
                if !self.issues.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.issues.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousIssue => {
                if !self.issues.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.issues.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)]).split(rect);

        let summary = Paragraph::new(Line::from(Span::styled(
            self.summary.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        )));
        f.render_widget(summary, chunks[0]);

        let block = Block::default().borders(Borders::ALL).title("Issues");

        if self.issues.is_empty() {
            let empty_message = if self.loading {
                "Loading issues..."
            } else {
                "No issues match the current filters. Press 'C' to clear filters or 'n' to report an issue."
            };
            let empty_list = List::new(vec![ListItem::new(empty_message)]).block(block);
            f.render_widget(empty_list, chunks[1]);
        } else {
            // Each issue takes two lines
            let total_lines = self.issues.len() * 2;
            let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(chunks[1], total_lines);
            let viewport = list_area.height.saturating_sub(2) as usize;
            self.scrollbar
                .update_state(total_lines, self.selected_index * 2, viewport);

            let items: Vec<ListItem> = self.issues.iter().map(|issue| self.create_issue_item(issue)).collect();
            let issues_list = List::new(items).block(block).highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

            f.render_stateful_widget(issues_list, list_area, &mut self.list_state);
            self.scrollbar.render(f, scrollbar_area);
        }

        f.render_widget(Paragraph::new(self.action_hints()), chunks[2]);
    }
}
