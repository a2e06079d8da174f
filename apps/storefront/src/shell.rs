//! # Session Shell
//!
//! Line-oriented front end for the commands layer. One command per line in,
//! one JSON document per line out.
//!
//! ## Session Example
//! ```text
//! > add combo-8
//! {"items":[{"itemId":"combo-8",...}],"totals":{...,"total":800}}
//! > mode delivery
//! {"form":{...},"status":{"state":"idle"},"totals":{...}}
//! > order
//! {"code":"ORDER_REJECTED","message":"Por favor ingresa tu nombre"}
//! > name Juan
//! > address Jr. Lima 456
//! > order
//! {"orderId":"...","total":1100,"totalFormatted":"S/ 11","uri":"https://wa.me/...",...}
//! > quit
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use combinado_core::DeliveryMode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::commands::{cart, config, menu, order};
use crate::error::ApiError;
use crate::state::AppState;

/// Usage lines returned by `help`.
const USAGE: &[&str] = &[
    "menu                      list combos and drinks",
    "cart                      show cart and totals",
    "form                      show the order form",
    "config                    show store configuration",
    "add <id>                  add one unit of a menu item",
    "inc <id> / dec <id>       change quantity by one",
    "set <id> <n>              set quantity (0 removes)",
    "rm <id>                   remove an item",
    "clear                     empty the cart",
    "name <text>               customer name",
    "mode pickup|delivery      fulfilment mode",
    "address <text>            delivery address",
    "order                     send the order",
    "help                      this list",
    "quit                      end the session",
];

// =============================================================================
// Command Parsing
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    Cart,
    Form,
    Config,
    Add(String),
    Increment(String),
    Decrement(String),
    Set(String, i64),
    Remove(String),
    Clear,
    Name(String),
    Mode(DeliveryMode),
    Address(String),
    Order,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "menu" => Command::Menu,
            "cart" => Command::Cart,
            "form" => Command::Form,
            "config" => Command::Config,
            "add" => Command::Add(required(rest, "add <id>")?),
            "inc" => Command::Increment(required(rest, "inc <id>")?),
            "dec" => Command::Decrement(required(rest, "dec <id>")?),
            "set" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(id), Some(n), None) => {
                        let quantity = n.parse::<i64>().map_err(|_| {
                            ApiError::validation(format!("Quantity must be a whole number: {}", n))
                        })?;
                        Command::Set(id.to_string(), quantity)
                    }
                    _ => return Err(usage("set <id> <n>")),
                }
            }
            "rm" => Command::Remove(required(rest, "rm <id>")?),
            "clear" => Command::Clear,
            "name" => Command::Name(rest.to_string()),
            "mode" => Command::Mode(rest.parse().map_err(ApiError::validation)?),
            "address" => Command::Address(rest.to_string()),
            "order" => Command::Order,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::validation(format!(
                    "Unknown command: {} (try help)",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn required(rest: &str, form: &str) -> Result<String, ApiError> {
    if rest.is_empty() {
        Err(usage(form))
    } else {
        Ok(rest.to_string())
    }
}

fn usage(form: &str) -> ApiError {
    ApiError::validation(format!("Usage: {}", form))
}

// =============================================================================
// Execution
// =============================================================================

#[derive(Serialize)]
struct HelpResponse {
    commands: &'static [&'static str],
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}

/// Runs one command against the session state.
pub fn execute(state: &mut AppState, command: Command) -> Result<Value, ApiError> {
    let cart_state = &mut state.cart;
    let form = &mut state.form;

    match command {
        Command::Menu => to_json(&menu::get_menu(cart_state.catalog())),
        Command::Cart => to_json(&cart::get_cart(cart_state, form)),
        Command::Form => to_json(&order::get_form(cart_state, form)),
        Command::Config => to_json(&config::get_config(&state.config)),
        Command::Add(id) => to_json(&cart::add_to_cart(cart_state, form, &id)?),
        Command::Increment(id) => to_json(&cart::change_quantity(cart_state, form, &id, 1)),
        Command::Decrement(id) => to_json(&cart::change_quantity(cart_state, form, &id, -1)),
        Command::Set(id, n) => to_json(&cart::set_quantity(cart_state, form, &id, n)),
        Command::Remove(id) => to_json(&cart::remove_from_cart(cart_state, form, &id)),
        Command::Clear => to_json(&cart::clear_cart(cart_state, form)),
        Command::Name(name) => to_json(&order::set_customer_name(cart_state, form, &name)),
        Command::Mode(mode) => to_json(&order::set_delivery_mode(cart_state, form, mode)),
        Command::Address(address) => to_json(&order::set_address(cart_state, form, &address)),
        Command::Order => to_json(&order::place_order(state)?),
        Command::Help => to_json(&HelpResponse { commands: USAGE }),
        Command::Quit => Ok(Value::Null),
    }
}

/// Reads commands from `input` until `quit` or end of input, writing one
/// JSON line per command to `output`.
///
/// Command failures are part of the conversation and printed as `ApiError`
/// JSON; only I/O failures end the session early.
pub fn run_session<R, W>(state: &mut AppState, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Ok(Command::Quit) => {
                debug!("Quit requested");
                break;
            }
            Ok(command) => execute(state, command),
            Err(e) => Err(e),
        };

        let json = match reply {
            Ok(value) => value,
            Err(e) => serde_json::to_value(&e).unwrap_or_else(|_| Value::String(e.message)),
        };

        writeln!(output, "{}", json)?;
        output.flush()?;
    }

    Ok(())
}
