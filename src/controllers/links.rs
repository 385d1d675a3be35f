//! Outbound links - source repos, contact channels, resume
//!
//! A terminal cannot follow a hyperlink for the reader, so "opening" a link
//! records it as the status line message and logs it. Source links sit
//! inside project cards; their handler consumes the click so the card
//! underneath never opens its detail view.

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::catalog::ContentCatalog;
use crate::page::NodeKind;
use crate::state::mouse;
use crate::state::subscription::Subscription;

#[derive(Clone)]
pub struct LinkController {
    catalog: Rc<ContentCatalog>,
    status: Signal<Option<String>>,
}

impl LinkController {
    pub fn new(catalog: Rc<ContentCatalog>) -> Self {
        Self {
            catalog,
            status: signal(None),
        }
    }

    /// Message shown in the status line, if any.
    pub fn status(&self) -> Option<String> {
        self.status.get()
    }

    pub fn status_signal(&self) -> Signal<Option<String>> {
        self.status.clone()
    }

    pub fn clear_status(&self) {
        if self.status.get().is_some() {
            self.status.set(None);
        }
    }

    /// Surface `url` to the reader.
    pub fn open(&self, url: &str) {
        log::info!("event=link_opened url={}", url);
        self.status.set(Some(format!("→ {url}")));
    }

    /// Open the repository link of project `id`. Unknown ids are ignored.
    pub fn open_source(&self, id: u32) -> bool {
        match self.catalog.project(id) {
            Some(project) => {
                let url = project.source_url.clone();
                self.open(&url);
                true
            }
            None => false,
        }
    }

    pub fn bind(&self) -> Vec<Subscription> {
        let links = self.clone();
        let sub = mouse::on_node_click(
            |kind| matches!(kind, NodeKind::Link(_) | NodeKind::SourceLink(_) | NodeKind::ContactSubmit),
            move |kind, _| match kind {
                NodeKind::Link(url) => {
                    links.open(url);
                    true
                }
                NodeKind::SourceLink(id) => links.open_source(*id),
                NodeKind::ContactSubmit => {
                    log::info!("event=contact_submit delivered=false");
                    links.status.set(Some(format!(
                        "Messages are not sent from here. Write to {}",
                        links.catalog.contact.email
                    )));
                    true
                }
                _ => false,
            },
        );
        vec![sub]
    }
}
