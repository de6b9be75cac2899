//! Terminal rendering of raw object responses.

use anyhow::Result;
use client_rpc_sui::{ObjectDetails, ObjectOwner, RawObjectResponse};
use console::style;

pub fn print_summary(object_id: &str, response: &RawObjectResponse) {
    print!("{}", render_summary(object_id, response));
}

pub fn print_json(response: &RawObjectResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

fn render_summary(object_id: &str, response: &RawObjectResponse) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", style("Object:").bold().cyan(), object_id));
    out.push_str(&format!(
        "{} {:?}\n",
        style("Status:").bold().cyan(),
        response.status
    ));

    if let Some(reference) = response.reference() {
        out.push_str(&format!(
            "{} version {}, digest {}\n",
            style("Reference:").bold().cyan(),
            reference.version,
            reference.digest
        ));
    }

    match (response.object(), &response.details) {
        (Some(object), _) => {
            out.push_str(&format!(
                "{} {}\n",
                style("Owner:").bold().cyan(),
                describe_owner(&object.owner)
            ));
            out.push_str(&format!(
                "{} {} chars (encoded)\n",
                style("BCS:").bold().cyan(),
                object.data.bcs_bytes.len()
            ));
        }
        (None, Some(ObjectDetails::Missing(id))) => {
            out.push_str(&format!("{}\n", style(format!("No object with ID {}", id)).yellow()));
        }
        (None, _) => {}
    }

    out
}

fn describe_owner(owner: &ObjectOwner) -> String {
    match owner {
        ObjectOwner::AddressOwner(address) => format!("address {}", address),
        ObjectOwner::ObjectOwner(parent) => format!("object {}", parent),
        ObjectOwner::Shared {
            initial_shared_version,
        } => format!("shared (since version {})", initial_shared_version),
        ObjectOwner::Immutable => "immutable".to_string(),
    }
}
