//! Console probe for the board core.
//!
//! # Responsibility
//! - Host a console implementation of the render surface and exercise the
//!   intake and drag-and-drop flows end to end.
//! - Keep output deterministic apart from generated ids.

use dragboard_core::{
    core_version, default_log_level, init_logging, BoardStore, DragGesture, DragGestureEvent,
    DragTransfer, ProjectDraft, ProjectInput, ProjectItem, ProjectList, ProjectStatus,
    RenderSurface, RowContent, SharedSurface, ValidationPolicy, ViewComponent,
};
use log::info;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Render surface that keeps the board in memory and prints on demand.
#[derive(Default)]
struct ConsoleSurface {
    headers: BTreeMap<&'static str, String>,
    rows: BTreeMap<&'static str, Vec<RowContent>>,
    highlights: BTreeMap<&'static str, bool>,
}

impl ConsoleSurface {
    fn print_board(&self) {
        for status in [ProjectStatus::Active, ProjectStatus::Finished] {
            let key = status.as_str();
            let header = self.headers.get(key).map(String::as_str).unwrap_or(key);
            let highlighted = self.highlights.get(key).copied().unwrap_or(false);
            let marker = if highlighted { " [droppable]" } else { "" };
            println!("== {header}{marker} ==");

            match self.rows.get(key) {
                Some(rows) if !rows.is_empty() => {
                    for row in rows {
                        println!("- {} ({})", row.title, row.people_line);
                        println!("  {}", row.description);
                    }
                }
                _ => println!("(empty)"),
            }
        }
    }
}

impl RenderSurface for ConsoleSurface {
    fn set_column_header(&mut self, column: ProjectStatus, text: &str) {
        self.headers.insert(column.as_str(), text.to_string());
    }

    fn clear_column(&mut self, column: ProjectStatus) {
        self.rows.insert(column.as_str(), Vec::new());
    }

    fn append_row(&mut self, column: ProjectStatus, row: RowContent) {
        self.rows.entry(column.as_str()).or_default().push(row);
    }

    fn set_drop_highlight(&mut self, column: ProjectStatus, highlighted: bool) {
        self.highlights.insert(column.as_str(), highlighted);
    }

    fn show_alert(&mut self, message: &str) {
        println!("[alert] {message}");
    }

    fn clear_form(&mut self) {
        println!("[form] fields cleared");
    }
}

fn main() {
    let log_dir = std::env::temp_dir().join("dragboard-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory is not valid UTF-8"),
    }

    println!("dragboard_core version={}", core_version());

    let surface = Rc::new(RefCell::new(ConsoleSurface::default()));
    let shared: SharedSurface = surface.clone();
    let store = BoardStore::new().into_shared();

    let active = Rc::new(RefCell::new(ProjectList::new(
        ProjectStatus::Active,
        Rc::clone(&shared),
    )));
    let finished = Rc::new(RefCell::new(ProjectList::new(
        ProjectStatus::Finished,
        Rc::clone(&shared),
    )));
    ProjectList::subscribe(&active, &store);
    ProjectList::subscribe(&finished, &store);
    active.borrow_mut().configure();
    finished.borrow_mut().configure();

    let mut input = ProjectInput::new(
        Rc::clone(&store),
        Rc::clone(&shared),
        ValidationPolicy::default(),
    );
    input.configure();

    let accepted = input.handle_submit(ProjectDraft::new(
        "Learn Systems Design",
        "Study the paper",
        "3",
    ));
    match &accepted {
        Ok(id) => println!("[form] accepted id={id}"),
        Err(err) => println!("[form] {err}"),
    }

    if let Err(err) = input.handle_submit(ProjectDraft::new("Short one", "abcd", "3")) {
        println!("[form] {err}");
    }

    if let Ok(id) = accepted {
        let project = store.borrow().get(&id).cloned();
        if let Some(project) = project {
            let item = ProjectItem::new(project, Rc::clone(&shared));
            let mut transfer = DragTransfer::new();
            let mut gesture = DragGesture::new();

            item.on_drag_start(&mut transfer);
            gesture.apply(DragGestureEvent::Started);

            let mut target = finished.borrow_mut();
            if target.on_drag_over(&transfer) {
                gesture.apply(DragGestureEvent::EnteredTarget);
            }
            if let Some(observed) = target.on_drop(&transfer) {
                println!("[dnd] drop observed id={observed}, board unchanged");
            }
            gesture.apply(DragGestureEvent::Dropped);
            target.on_drag_leave();
            item.on_drag_end(&transfer);
            println!("[dnd] gesture phase={:?}", gesture.phase());
        }
    }

    surface.borrow().print_board();
    info!("event=probe_done module=cli status=ok");
}
