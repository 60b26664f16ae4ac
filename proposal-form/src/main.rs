mod proposal;

use std::fs::File;
use std::time::{Duration, Instant};

use dropdown::prelude::*;
use hostdom::{Document, DocumentError, Element, Event, FocusState, Key, MediaEnvironment};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::proposal::{PROPOSAL_LENGTHS, PROPOSAL_TYPES, ProposalFields};

const FORM_ID: &str = "proposal-form";

/// Signed-in user as the identity provider reports it.
const CURRENT_USER: &str = r#"{"name": "Ada Lovelace", "preferred_username": "ada@example.com"}"#;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Dropdown(#[from] DropdownError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("serialization: {0}")]
    Json(#[from] serde_json::Error),
}

/// A dropdown together with its attached options.
struct Field {
    dropdown: Dropdown,
    _options: Vec<Mounted<DropdownOption>>,
}

impl Field {
    fn new(
        props: DropdownProps,
        choices: &[&str],
        media: &MediaEnvironment,
        scope: &Scope,
    ) -> Result<Self, AppError> {
        let dropdown = Dropdown::new(props, media);
        let scope = dropdown.scope(scope);
        let options = choices
            .iter()
            .map(|choice| Mounted::attach(DropdownOption::new().text(*choice), &scope))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            dropdown,
            _options: options,
        })
    }
}

/// The "new proposal" page and the state it hosts.
struct ProposalPage {
    document: Document,
    focus: FocusState,
    user_menu: UserMenu,
    kind: Field,
    length: Field,
}

impl ProposalPage {
    fn new(media: &MediaEnvironment, user: UserSummary) -> Result<Self, AppError> {
        let root = Scope::root();
        let kind = Field::new(
            DropdownProps::new().name("type").id("type-select").label("Type"),
            &PROPOSAL_TYPES,
            media,
            &root,
        )?;
        let length = Field::new(
            DropdownProps::new()
                .name("length")
                .id("length-select")
                .label("Length"),
            &PROPOSAL_LENGTHS,
            media,
            &root,
        )?;

        let mut page = Self {
            document: Document::default().with_mount_point("dialogs"),
            focus: FocusState::new(),
            user_menu: UserMenu::new(user),
            kind,
            length,
        };
        page.render();
        Ok(page)
    }

    fn dropdowns(&self) -> [&Dropdown; 2] {
        [&self.kind.dropdown, &self.length.dropdown]
    }

    fn render(&mut self) {
        let kind = self.kind.dropdown.render_in(&mut self.document);
        let length = self.length.dropdown.render_in(&mut self.document);

        let form = Element::new("form")
            .id(FORM_ID)
            .attr("method", "post")
            .child(Element::new("label").attr("for", "title-input").text("Title"))
            .child(
                Element::new("input")
                    .id("title-input")
                    .attr("name", "title")
                    .attr("value", "Headless widgets in Rust")
                    .focusable(true),
            )
            .child(Element::new("label").attr("for", "type-select").text("Type"))
            .child(kind)
            .child(Element::new("label").attr("for", "length-select").text("Length"))
            .child(length)
            .child(Element::new("label").attr("for", "description-input").text("Description"))
            .child(
                Element::new("textarea")
                    .id("description-input")
                    .attr("name", "description")
                    .text("State machines, focus and portals.")
                    .focusable(true),
            )
            .child(
                Element::button()
                    .id("submit")
                    .attr("type", "submit")
                    .data("button-primary", "")
                    .text("Submit"),
            );

        let header = Element::new("header")
            .id("page-header")
            .child(Element::new("h1").text("New proposal"))
            .child(self.user_menu.render());

        self.document.set_body(
            Element::new("body")
                .id("body")
                .child(header)
                .child(Element::new("main").id("page-main").child(form)),
        );
        self.user_menu.clear_dirty();
        for dropdown in self.dropdowns() {
            dropdown.clear_dirty();
        }
    }

    /// Route an event to every widget and re-render if any state changed.
    fn dispatch(&mut self, event: Event) {
        let widgets: [&dyn WidgetEvents; 3] =
            [&self.user_menu, &self.kind.dropdown, &self.length.dropdown];
        let mut cx = EventContext::new(&mut self.focus);
        for widget in widgets {
            if widget.dispatch(&event, &mut cx).is_handled() {
                break;
            }
        }
        for widget_event in cx.drain_events() {
            log::info!("[page] {:?} {} {:?}", widget_event.kind, widget_event.widget_id, widget_event.value);
        }
        self.refresh();
    }

    /// Press Tab: focus moves to the next tab stop and the blur is delivered.
    fn tab(&mut self, backwards: bool) {
        let events = self.focus.tab(self.document.body(), backwards);
        for event in events {
            self.dispatch(event);
        }
    }

    fn refresh(&mut self) {
        if self.user_menu.is_dirty() || self.dropdowns().iter().any(|d| d.is_dirty()) {
            self.render();
        }
    }

    /// Take the dropdowns down, removing any overlay they left mounted.
    fn teardown(self) -> Result<(), AppError> {
        let Self {
            mut document,
            kind,
            length,
            ..
        } = self;
        kind.dropdown.teardown_in(&mut document);
        length.dropdown.teardown_in(&mut document);
        log::info!(
            "[page] torn down, dialogs empty: {}",
            document.mount_point("dialogs")?.is_empty()
        );
        Ok(())
    }

    /// Let running transitions finish.
    async fn settle(&mut self, transition: Duration) {
        tokio::time::sleep(transition).await;
        let now = Instant::now();
        for dropdown in self.dropdowns() {
            dropdown.tick(now);
        }
        self.refresh();
    }

    fn option_id(field: &Field, text: &str) -> Option<String> {
        field
            .dropdown
            .options()
            .into_iter()
            .find(|o| o.display_text == text)
            .map(|o| o.id.to_string())
    }
}

async fn run() -> Result<(), AppError> {
    let media = MediaEnvironment::new(800, false);
    log::info!(
        "[page] viewport {}px, reduced motion: {}",
        media.viewport_width(),
        media.prefers_reduced_motion()
    );
    let transition = DropdownConfig::default().transition.duration;
    let user: UserSummary = serde_json::from_str(CURRENT_USER)?;
    let mut page = ProposalPage::new(&media, user)?;

    // Header: open the user menu, then dismiss it with Escape
    page.dispatch(Event::click(page.user_menu.trigger_id()));
    log::info!(
        "[page] user menu open: {}, focus on {:?}",
        page.user_menu.is_open(),
        page.focus.focused()
    );
    page.dispatch(Event::key(page.user_menu.sign_out_id(), Key::Escape));

    // Mobile: pick the type from the overlay
    let trigger = page.kind.dropdown.trigger_id();
    page.dispatch(Event::pointer_down(trigger));
    log::info!(
        "[page] overlay nodes: {}",
        page.document.mount_point("dialogs")?.nodes().len()
    );
    if let Some(workshop) = ProposalPage::option_id(&page.kind, "Workshop") {
        page.dispatch(Event::click(workshop));
    }
    page.settle(transition).await;

    // Desktop: choose the length with the keyboard
    media.set_viewport_width(1600);
    let trigger = page.length.dropdown.trigger_id();
    let listbox = page.length.dropdown.listbox_id();
    page.focus.focus(&trigger);
    page.dispatch(Event::key(trigger.clone(), Key::Enter));
    for _ in 0..3 {
        page.dispatch(Event::key(listbox.clone(), Key::Down));
    }
    page.dispatch(Event::key(listbox, Key::Enter));
    page.settle(transition).await;

    // Open again and tab away: the selection stays
    page.dispatch(Event::key(trigger, Key::Enter));
    page.tab(false);
    log::info!("[page] focus on {:?}", page.focus.focused());
    page.settle(transition).await;

    let data = page.document.form_data(FORM_ID)?;
    log::debug!("[page] form data {}", serde_json::to_string(&data)?);
    let fields = ProposalFields::from_form(&data);
    println!("{}", data.to_urlencoded());
    println!("{}", serde_json::to_string_pretty(&fields)?);
    for (field, message) in fields.validate() {
        println!("{field}: {message}");
    }
    page.teardown()
}

#[tokio::main]
async fn main() {
    let log_file = File::create("proposal-form.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(width: u16) -> (MediaEnvironment, ProposalPage) {
        let media = MediaEnvironment::new(width, true);
        let user = UserSummary::new("Ada Lovelace", "ada@example.com");
        let page = ProposalPage::new(&media, user).unwrap();
        (media, page)
    }

    #[test]
    fn test_header_hosts_user_menu() {
        let (_media, mut page) = page(1600);
        let trigger = page.user_menu.trigger_id();
        assert!(page.document.find(&trigger).is_some());
        assert!(page.document.find("page-header").is_some());

        page.dispatch(Event::click(trigger.clone()));
        assert!(page.user_menu.is_open());
        let menu = page.document.find(&page.user_menu.id_string()).unwrap();
        assert_eq!(menu.get_attr("open"), Some(""));

        page.dispatch(Event::key(page.user_menu.sign_out_id(), Key::Escape));
        assert!(!page.user_menu.is_open());
        assert_eq!(page.focus.focused(), Some(trigger.as_str()));
    }

    #[test]
    fn test_tab_out_of_open_list_closes_dropdown() {
        let (_media, mut page) = page(1600);
        let trigger = page.length.dropdown.trigger_id();
        page.focus.focus(&trigger);

        page.dispatch(Event::key(trigger.clone(), Key::Enter));
        assert!(page.length.dropdown.is_open());
        assert_eq!(
            page.focus.focused(),
            Some(page.length.dropdown.listbox_id().as_str())
        );

        page.tab(false);
        assert!(!page.length.dropdown.is_open());
        assert_eq!(page.focus.focused(), Some("description-input"));
    }
}
