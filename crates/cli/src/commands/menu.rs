//! Drawer menu command.

use boutique_storefront::screens::Drawer;
use serde::Serialize;

use crate::output::Output;

#[derive(Serialize)]
struct Selection<'a> {
    id: &'a str,
    route: Option<&'static str>,
}

/// Print the drawer menu, or where one entry leads.
pub fn run(select: Option<&str>, output: Output) {
    let drawer = Drawer;

    if let Some(id) = select {
        let route = drawer.select(id).map(|route| route.name());
        if output.is_json() {
            output.json(&Selection { id, route });
        } else {
            output.line(route.unwrap_or("(no route)"));
        }
        return;
    }

    if output.is_json() {
        output.json(drawer.items());
        return;
    }

    for item in drawer.items() {
        match item.screen {
            Some(screen) => output.line(format!("{:>2}  {} -> {screen}", item.id, item.label)),
            None => output.line(format!("{:>2}  {}", item.id, item.label)),
        }
    }
}
