//! Actions demo: a scripted key sequence exercising continuous, edge, and
//! chord activation.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use input::{ActionConfig, ActivationMode, InputMapper, Key};
use tracing::info;
use tracing_subscriber::EnvFilter;

enum Event {
    Press(Key),
    Release(Key),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut mapper = InputMapper::new();
    let jumps = Rc::new(Cell::new(0u32));
    let jump_hook = Rc::clone(&jumps);

    mapper.add_action(ActionConfig {
        name: "fire".into(),
        keys: vec![Key::LeftMouse],
        ..Default::default()
    })?;
    mapper.add_action(ActionConfig {
        name: "jump".into(),
        keys: vec![Key::Space, Key::W],
        mode: ActivationMode::Press,
        callback: Some(Box::new(move || jump_hook.set(jump_hook.get() + 1))),
        ..Default::default()
    })?;
    mapper.add_action(ActionConfig {
        name: "pause".into(),
        keys: vec![Key::Escape],
        mode: ActivationMode::Release,
        ..Default::default()
    })?;
    mapper.add_action(ActionConfig {
        name: "save".into(),
        keys: vec![Key::Control, Key::S],
        chord: true,
        mode: ActivationMode::Press,
        ..Default::default()
    })?;

    // (frame, event) pairs fed to the mapper as the frames play out
    let script: Vec<(u32, Event)> = vec![
        (0, Event::Press(Key::LeftMouse)),
        (2, Event::Release(Key::LeftMouse)),
        (2, Event::Press(Key::Space)),
        (4, Event::Release(Key::Space)),
        (4, Event::Press(Key::W)),
        (5, Event::Release(Key::W)),
        (6, Event::Press(Key::Escape)),
        (8, Event::Release(Key::Escape)),
        (9, Event::Press(Key::Control)),
        (10, Event::Press(Key::S)),
        (11, Event::Release(Key::S)),
        (11, Event::Release(Key::Control)),
    ];

    for frame in 0..13 {
        for (_, event) in script.iter().filter(|(at, _)| *at == frame) {
            match event {
                Event::Press(key) => mapper.press(*key),
                Event::Release(key) => mapper.release(*key),
            }
        }
        mapper.update();

        let names: Vec<&str> = mapper.action_names().collect();
        let active: Vec<&str> = names
            .into_iter()
            .filter(|name| mapper.is_active(name).unwrap_or(false))
            .collect();
        info!(frame, ?active, "frame processed");
    }

    info!(jumps = jumps.get(), "actions demo finished");
    Ok(())
}
