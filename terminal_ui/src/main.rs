use std::env;
use std::io;

use todo_shared::{Task, TaskList};
use tui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use url::Url;

const DEFAULT_SERVER_URL: &str = "http://localhost:9000";

fn todo_endpoint() -> Result<Url, url::ParseError> {
    let base = env::var("TODO_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    Url::parse(&base)?.join("/todo")
}

async fn fetch_tasks(endpoint: Url) -> Result<Vec<Task>, reqwest::Error> {
    let response = reqwest::get(endpoint).await?.error_for_status()?;
    let list: TaskList = response.json().await?;
    Ok(list.data)
}

fn task_line(task: &Task) -> Spans<'static> {
    let (marker, title_style) = if task.completed {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(Color::Yellow))
    };

    Spans::from(vec![
        Span::raw(marker),
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(
            task.created_at.format("%Y-%m-%d %H:%M").to_string(),
            Style::default().fg(Color::LightBlue),
        ),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = todo_endpoint()?;
    let tasks = tokio::runtime::Runtime::new()?.block_on(fetch_tasks(endpoint))?;

    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let task_list = if tasks.is_empty() {
        vec![Spans::from(Span::styled(
            "nothing to do",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        tasks.iter().map(task_line).collect::<Vec<_>>()
    };

    let done = tasks.iter().filter(|task| task.completed).count();
    let title = format!("todo ({}/{} done)", done, tasks.len());

    let task_paragraph = Paragraph::new(task_list)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Left);

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Percentage(100)].as_ref())
            .split(f.size());

        f.render_widget(task_paragraph, chunks[0]);
    })?;

    Ok(())
}
