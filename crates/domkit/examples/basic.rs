//! Example: wiring domkit to a simulated page

use std::rc::Rc;

use domkit::{DomKit, EventListener, ScrollAxis, Target, Window};
use domkit_dom::{DOMRect, HostFeatures};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for features in [HostFeatures::modern(), HostFeatures::legacy(8)] {
        let window = Rc::new(Window::new(features));
        let panel = window.append_element(window.body(), "div");
        let item = window.append_element(panel, "div");
        window.set_sheet_style(panel, "overflowY", "auto")?;
        window.set_bounding_rect(panel, DOMRect::from_xywh(0.0, 0.0, 300.0, 200.0))?;
        window.set_bounding_rect(item, DOMRect::from_xywh(0.0, 180.0, 300.0, 40.0))?;

        let kit = DomKit::new(Some(Rc::clone(&window)));
        println!("domkit v{} on {:?}", domkit::VERSION, kit.capabilities());

        kit.classes().add(Some(item), "row selected");
        println!("  selected: {}", kit.classes().has(Some(item), "selected")?);

        kit.style().set(Some(item), "opacity", 0.5);
        println!("  opacity: {:?}", kit.style().get(Some(item), "opacity"));

        let container = kit
            .scroll()
            .nearest_scroll_container(Some(Target::Node(item)), ScrollAxis::Vertical);
        println!("  scroll container: {container:?}");
        println!("  visible in container: {}", kit.scroll().is_within_container(Some(item), container));

        kit.events().bind_once(
            Some(Target::Node(item)),
            "click",
            Some(EventListener::new(|_, event| println!("  clicked {:?}", event.current_target))),
        );
        window.dispatch(Target::Node(item), "click");
        window.dispatch(Target::Node(item), "click");
    }

    Ok(())
}
