//! Rendering for the UserMenu widget.

use hostdom::Element;

use super::{SIGN_OUT_HREF, UserMenu};

impl UserMenu {
    pub fn render(&self) -> Element {
        let open = self.is_open();
        let user = self.user();

        let summary = Element::new("summary")
            .id(self.trigger_id())
            .focusable(true)
            .aria("haspopup", "menu")
            .aria("controls", self.menu_id())
            .attr_opt("aria-expanded", open.then_some("true"))
            .attr("title", user.title())
            .child(Element::span("User menu").data("visually-hidden", ""))
            .child(
                Element::span("")
                    .data("persona", "")
                    .data("initials", user.initials())
                    .attr("title", user.title())
                    .child(Element::span(user.name.clone()).data("visually-hidden", "true")),
            );

        let menu = Element::new("menu")
            .id(self.menu_id())
            .aria("labelledby", self.trigger_id())
            .attr("tabindex", "0")
            .focusable(true)
            .child(
                Element::new("hgroup")
                    .id(self.header_id())
                    .role("menuitem")
                    .child(Element::new("h2").text(user.name.clone()))
                    .child(Element::new("p").text(user.username.clone())),
            )
            .child(
                Element::new("a")
                    .id(self.sign_out_id())
                    .role("menuitem")
                    .attr("href", SIGN_OUT_HREF)
                    .focusable(true)
                    .text("Sign out"),
            );

        Element::new("details")
            .id(self.id_string())
            .data("user-menu", "")
            .attr_opt("open", open.then_some(""))
            .child(summary)
            .child(menu)
    }
}
