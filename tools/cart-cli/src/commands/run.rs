//! Interactive cart session.

use std::io::BufRead;

use anyhow::Result;
use cart_commerce::cart::Item;
use cart_commerce::Money;
use cart_widget::{CartController, UiEvent};
use dialoguer::Input;

use super::RunArgs;
use crate::context::Context;
use crate::terminal::TerminalSurface;

const HELP: &[(&str, &str)] = &[
    ("list", "redraw the cart"),
    ("select <id> / unselect <id>", "toggle one item"),
    ("all on|off", "toggle every item"),
    ("qty <id> <n>", "set a quantity"),
    ("inc <id> / dec <id>", "step a quantity"),
    ("add <id> <price> <qty> <name...>", "add an item"),
    ("delete", "delete selected items"),
    ("order", "place the order"),
    ("quit", "leave"),
];

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum Line {
    Event(UiEvent),
    Add(Item),
    List,
    Help,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> Result<Line, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = words.split_first() else {
        return Ok(Line::Empty);
    };

    let id = || {
        args.first()
            .copied()
            .ok_or_else(|| format!("usage: {} <id>", command))
    };

    let parsed = match command {
        "list" | "ls" => Line::List,
        "help" | "?" => Line::Help,
        "quit" | "exit" | "q" => Line::Quit,
        "select" => Line::Event(UiEvent::item_checked(id()?, true)),
        "unselect" => Line::Event(UiEvent::item_checked(id()?, false)),
        "inc" => Line::Event(UiEvent::increase(id()?)),
        "dec" => Line::Event(UiEvent::decrease(id()?)),
        "delete" => Line::Event(UiEvent::delete_selected()),
        "order" => Line::Event(UiEvent::place_order()),
        "all" => match args.first().copied() {
            Some("on") => Line::Event(UiEvent::select_all(true)),
            Some("off") => Line::Event(UiEvent::select_all(false)),
            _ => return Err("usage: all on|off".to_string()),
        },
        "qty" => match args {
            [id, rest @ ..] => Line::Event(UiEvent::quantity_input(*id, rest.join(" "))),
            [] => return Err("usage: qty <id> <n>".to_string()),
        },
        "add" => match args {
            [id, price, quantity, name @ ..] if !name.is_empty() => {
                let price: u64 = price
                    .parse()
                    .map_err(|_| format!("invalid price: {}", price))?;
                let quantity: u32 = quantity
                    .parse()
                    .map_err(|_| format!("invalid quantity: {}", quantity))?;
                Line::Add(Item::new(*id, name.join(" "), Money::new(price), quantity))
            }
            _ => return Err("usage: add <id> <price> <qty> <name...>".to_string()),
        },
        other => return Err(format!("unknown command: {} (try `help`)", other)),
    };
    Ok(parsed)
}

/// Run the interactive session.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let surface = TerminalSurface::new(ctx.output.clone(), args.yes);
    let mut cart = CartController::new(ctx.backend(), surface, &ctx.config.widget);
    cart.init()?;
    cart.surface().draw();

    let attended = console::user_attended();
    let mut stdin = std::io::stdin().lock().lines();

    loop {
        let line = if attended {
            match Input::<String>::new()
                .with_prompt("cart")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(_) => break,
            }
        } else {
            match stdin.next() {
                Some(line) => line?,
                None => break,
            }
        };

        match parse_line(&line) {
            Ok(Line::Empty) => {}
            Ok(Line::Quit) => break,
            Ok(Line::Help) => {
                for (usage, what) in HELP {
                    ctx.output.kv(usage, what);
                }
            }
            Ok(Line::List) => cart.surface().draw(),
            Ok(Line::Add(item)) => match cart.add_item(item) {
                Ok(()) => cart.surface().draw(),
                Err(e) => ctx.output.error(&e.to_string()),
            },
            Ok(Line::Event(event)) => match cart.handle_event(&event) {
                Ok(()) => cart.surface().draw(),
                Err(e) => ctx.output.error(&e.to_string()),
            },
            Err(message) => ctx.output.warn(&message),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!(
            parse_line("select item2"),
            Ok(Line::Event(UiEvent::item_checked("item2", true)))
        );
        assert_eq!(
            parse_line("  all off "),
            Ok(Line::Event(UiEvent::select_all(false)))
        );
        assert_eq!(
            parse_line("qty item1 abc"),
            Ok(Line::Event(UiEvent::quantity_input("item1", "abc")))
        );
        assert_eq!(parse_line("dec item3"), Ok(Line::Event(UiEvent::decrease("item3"))));
        assert_eq!(parse_line("delete"), Ok(Line::Event(UiEvent::delete_selected())));
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_line("add item9 15000 2 Laptop stand"),
            Ok(Line::Add(Item::new("item9", "Laptop stand", Money::new(15_000), 2)))
        );
        assert!(parse_line("add item9 -5 2 Stand").is_err());
        assert!(parse_line("add item9 100 2").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_line(""), Ok(Line::Empty));
        assert_eq!(parse_line("q"), Ok(Line::Quit));
        assert!(parse_line("select").is_err());
        assert!(parse_line("all maybe").is_err());
        assert!(parse_line("frobnicate").is_err());
    }
}
