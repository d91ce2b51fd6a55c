//! Walks a running catalog server through every route, first in XML then in
//! JSON, printing each exchange.
//!
//! Usage: `catalog-demo [BASE_URL]` (defaults to `CATALOG_URL` or
//! `http://127.0.0.1:5000`). Both passes touch the same ids, so restart the
//! server between runs for reproducible output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use piece_catalog::client::{CatalogClient, ClientError, ClientResponse};
use piece_catalog::codec::MediaType;

const DEFAULT_URL: &str = "http://127.0.0.1:5000";

fn print_response(response: &ClientResponse) {
    println!("Request:");
    println!("-> Action: {}", response.method);
    println!("-> URI: {}", response.url);
    println!("Answer:");
    println!("-> Status: {}", response.status);
    println!("-> Body:\n{}", response.body);
    println!(
        "-> Content-Type: {}\n\n",
        response.content_type.as_deref().unwrap_or("-")
    );
}

struct Payloads {
    new_piece: &'static str,
    edit_piece: &'static str,
    new_studio: &'static str,
    edit_studio: &'static str,
    new_evaluation: &'static str,
    edit_evaluation: &'static str,
    count_studio: i32,
    pattern: &'static str,
}

const XML: Payloads = Payloads {
    new_piece: "<Piece><piece_name>Piece 5</piece_name><date>2011-12-27</date>\
        <author>band</author><genre>instrumental</genre><nationality>spanish</nationality>\
        <studio>1</studio><summary>This piece...</summary></Piece>",
    edit_piece: "<Piece><piece_name>Piece 2</piece_name><date>2004-12-17</date>\
        <author>band</author><genre>vocal</genre><nationality>spanish</nationality>\
        <studio>2</studio><summary>This piece...</summary></Piece>",
    new_studio: "<Studio><studio_name>Studio 5</studio_name><email>email5@email.com</email>\
        <phone>+99-123456789</phone></Studio>",
    edit_studio: "<Studio><studio_name>Studio 2</studio_name><email>email2222@email.com</email>\
        <phone>+22-222256789</phone></Studio>",
    new_evaluation: "<Evaluation><piece_id>1</piece_id><note>4</note><date>2014-09-14</date>\
        <text>The piece is good</text></Evaluation>",
    edit_evaluation: "<Evaluation><piece_id>2</piece_id><note>2</note><date>2015-09-14</date>\
        <text>The piece is bad</text></Evaluation>",
    count_studio: 2,
    pattern: "good",
};

const JSON: Payloads = Payloads {
    new_piece: r#"[{"piece_name": "Piece 6", "date": "2015-08-19", "author": "composer",
        "genre": "vocal", "nationality": "spanish", "studio": 2, "summary": "This piece..."}]"#,
    edit_piece: r#"[{"piece_name": "Piece 2", "date": "2015-04-19", "author": "composer",
        "genre": "instrumental", "nationality": "spanish", "studio": 1, "summary": "This piece..."}]"#,
    new_studio: r#"[{"studio_name": "Studio 6", "email": "email6@email.com", "phone": "+56-565656556"}]"#,
    edit_studio: r#"[{"studio_name": "Studio 2", "email": "e2m2a2i2l@email.com", "phone": "+56-222222222"}]"#,
    new_evaluation: r#"[{"piece_id": 2, "note": 4, "date": "2017-08-11", "text": "The piece is good"}]"#,
    edit_evaluation: r#"[{"piece_id": 2, "note": 2, "date": "2017-08-11", "text": "The piece is bad"}]"#,
    count_studio: 1,
    pattern: "bad",
};

async fn walkthrough(client: &CatalogClient, payloads: &Payloads) -> Result<(), ClientError> {
    let steps = [
        client.list("pieces").await?,
        client.create("pieces", payloads.new_piece).await?,
        client.update("pieces", 2, payloads.edit_piece).await?,
        client.delete("pieces", 3).await?,
        client.list("studios").await?,
        client.create("studios", payloads.new_studio).await?,
        client.update("studios", 2, payloads.edit_studio).await?,
        client.delete("studios", 3).await?,
        client.create("evaluations", payloads.new_evaluation).await?,
        client.update("evaluations", 3, payloads.edit_evaluation).await?,
        client.delete("evaluations", 3).await?,
        client
            .evaluations_for_piece(1, Some("2021-08-11"), Some(1), Some(2))
            .await?,
        client.count_pieces_by_studio(payloads.count_studio).await?,
        client.search_evaluations(payloads.pattern).await?,
    ];

    for response in &steps {
        print_response(response);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "piece_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CATALOG_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let client = CatalogClient::new(&base_url, MediaType::Xml);

    for (client, payloads) in [
        (client.clone(), &XML),
        (client.with_media(MediaType::Json), &JSON),
    ] {
        tracing::info!("Running {} walkthrough against {}", client.media().as_str(), base_url);
        if let Err(e) = walkthrough(&client, payloads).await {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
