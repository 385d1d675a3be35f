//! End-to-end behavior of a mounted portfolio, driven with synthetic input
//! and the virtual clock.

use std::time::Duration;

use folio::pipeline::MountHandle;
use folio::state::{frame, input::InputEvent, keyboard, timer};
use folio::{
    mount, reset_all, Config, ContentCatalog, KeyboardEvent, MouseButton, MouseEvent, NodeKind,
    Rgba,
};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn setup() -> MountHandle {
    reset_all();
    mount(ContentCatalog::builtin(), Config::default(), (WIDTH, HEIGHT), |_| {}).unwrap()
}

fn settle(handle: &MountHandle) {
    for _ in 0..500 {
        handle.tick(Duration::from_millis(16));
        if !handle.scroll().is_animating() && !handle.tracker().is_pending() {
            break;
        }
    }
}

fn click(handle: &MountHandle, x: u16, y: u16) {
    let down = MouseEvent::down(MouseButton::Left, x, y);
    let up = MouseEvent::up(MouseButton::Left, x, y);
    handle.handle_event(InputEvent::Mouse(down)).unwrap();
    handle.handle_event(InputEvent::Mouse(up)).unwrap();
}

fn declared(handle: &MountHandle) -> Vec<String> {
    handle.catalog().section_ids().map(str::to_string).collect()
}

#[test]
fn every_offset_resolves_to_a_declared_section() {
    let handle = setup();
    let declared = declared(&handle);

    for offset in 0..=handle.scroll().max_offset() {
        handle.scroll().set_offset(offset);
        handle.tick(Duration::ZERO);
        let current = handle.tracker().current_section();
        assert!(declared.contains(&current), "offset {offset} gave {current}");
    }
}

#[test]
fn typing_reveals_first_role_then_moves_on() {
    let handle = setup();
    let config = handle.config().clone();
    let role = handle.catalog().profile.roles[0].clone();

    assert_eq!(handle.typing().text(), "");
    assert_eq!(handle.typing().role_index(), 0);

    for _ in 0..role.chars().count() {
        handle.tick(config.typing_tick());
    }
    assert_eq!(handle.typing().text(), role);

    handle.tick(config.typing_hold());
    assert_eq!(handle.typing().text(), "");
    assert_eq!(handle.typing().role_index(), 1);
}

#[test]
fn activating_twice_matches_activating_once() {
    let once = {
        let handle = setup();
        handle.nav().activate("projects");
        settle(&handle);
        (handle.scroll().offset(), handle.nav().current_section())
    };

    let twice = {
        let handle = setup();
        handle.nav().activate("projects");
        handle.nav().activate("projects");
        settle(&handle);
        (handle.scroll().offset(), handle.nav().current_section())
    };

    assert_eq!(once, twice);
    assert_eq!(twice.1, "projects");
}

#[test]
fn select_then_dismiss_closes_modal() {
    let handle = setup();
    assert!(handle.detail().select(2));
    assert!(handle.detail().is_open());

    assert!(handle.detail().dismiss());
    assert_eq!(handle.detail().selected(), None);
    assert!(!handle.detail().is_open());
    assert!(handle.scene().borrow().find(&NodeKind::Modal(2)).is_none());
}

#[test]
fn source_link_click_does_not_open_card() {
    let handle = setup();
    let (card, link) = {
        let scene = handle.scene();
        let scene = scene.borrow();
        let card = scene.find(&NodeKind::ProjectCard(2)).unwrap().rect;
        let link = scene.find(&NodeKind::SourceLink(2)).unwrap().rect;
        (card, link)
    };

    // Keep the whole card below the nav bar
    handle.scroll().set_offset(card.y.saturating_sub(4));
    let offset = handle.scroll().offset();

    click(&handle, link.x, link.y - offset);
    assert!(!handle.detail().is_open());
    let status = handle.links().status().unwrap();
    assert!(status.starts_with('→'));

    // The card body itself still opens the modal
    click(&handle, card.x + 2, card.y + 1 - offset);
    assert_eq!(handle.detail().selected(), Some(2));
}

#[test]
fn center_in_skills_highlights_only_skills() {
    let handle = setup();
    let top = handle.scene().borrow().section_top("skills").unwrap();

    handle.scroll().set_offset((top + 1).saturating_sub(HEIGHT / 2));
    handle.tick(Duration::ZERO);

    assert_eq!(handle.tracker().current_section(), "skills");
    let active: Vec<_> = handle
        .nav()
        .links()
        .iter()
        .filter(|link| handle.nav().is_active(&link.id))
        .map(|link| link.label.clone())
        .collect();
    assert_eq!(active, vec!["Skills".to_string()]);

    let link = handle
        .scene()
        .borrow()
        .find(&NodeKind::NavLink("skills".into()))
        .unwrap()
        .rect;
    let frame = handle.last_frame().unwrap();
    assert_eq!(frame.get(link.x, link.y).unwrap().fg, Rgba::PRIMARY);
}

#[test]
fn unknown_section_is_ignored() {
    let handle = setup();
    handle.scroll().set_offset(12);
    handle.tick(Duration::ZERO);
    let before = handle.tracker().current_section();

    assert!(!handle.nav().activate("nonexistent"));
    assert_eq!(handle.tracker().current_section(), before);
    assert_eq!(handle.scroll().offset(), 12);
    assert_eq!(handle.scroll().target(), None);
}

#[test]
fn unmount_detaches_everything() {
    let handle = setup();
    let scroll = handle.scroll().clone();
    handle
        .handle_event(InputEvent::Mouse(MouseEvent::move_to(10, 10)))
        .unwrap();
    assert!(timer::pending_count() > 0);

    handle.unmount();

    assert_eq!(timer::pending_count(), 0);
    assert_eq!(frame::pending_frames(), 0);
    assert_eq!(scroll.listener_count(), 0);
    assert!(!keyboard::dispatch(KeyboardEvent::new("j")));
    assert_eq!(scroll.offset(), 0);
}
