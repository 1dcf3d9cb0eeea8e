use jsontree::{parse, NodeType};
use miette::Report;

fn main() {
    let json = r#"
        {
            "user": {
                "name": "John Doe",
                "email": "john.doe@example.com",
                "roles": ["admin", "dev"],
                "age": 42
            }
        }
    "#;

    match parse(json) {
        Ok(doc) => {
            let user = doc.get("user").expect("user member");
            for member in user.children() {
                let key = member.key().unwrap_or_default();
                match member.node_type() {
                    NodeType::String => println!("{key}: {}", member.as_str().unwrap_or_default()),
                    NodeType::Array => println!("{key}: {} entries", member.len()),
                    other => println!("{key}: <{other}>"),
                }
            }
            println!("released {} nodes", jsontree::delete(doc));
        }
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
        }
    }

    if let Err(e) = parse(r#"{"broken": [1, 2,]}"#) {
        eprintln!("{:?}", Report::new(e));
    }
}
