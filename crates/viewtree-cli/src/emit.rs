//! Route table serialization
//!
//! - `json`: the forest as pretty JSON; components are import specifiers
//! - `js`: an ES module `export const routes = [...]` where every component
//!   becomes a lazy `() => import("...")`

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use viewtree_router::RouteNode;

use crate::config::OutputFormat;

/// Renders the forest in the requested format with `space`-wide indentation
pub fn render(forest: &[RouteNode], format: OutputFormat, space: usize) -> Result<String> {
    let indent = " ".repeat(space);
    match format {
        OutputFormat::Json => {
            let mut rendered = to_pretty_json(&forest, &indent)?;
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Js => {
            let mut writer = JsWriter::new(indent);
            writer.out.push_str("export const routes = ");
            writer.write_nodes(forest, 0)?;
            writer.out.push('\n');
            Ok(writer.out)
        }
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: &str) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize routes")?;
    String::from_utf8(buf).context("Serialized routes are not valid UTF-8")
}

/// Writes route nodes as JavaScript object literals
struct JsWriter {
    out: String,
    indent: String,
}

impl JsWriter {
    fn new(indent: String) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    fn pad(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(&self.indent);
        }
    }

    fn write_nodes(&mut self, nodes: &[RouteNode], level: usize) -> Result<()> {
        if nodes.is_empty() {
            self.out.push_str("[]");
            return Ok(());
        }

        self.out.push_str("[\n");
        for (i, node) in nodes.iter().enumerate() {
            self.pad(level + 1);
            self.write_node(node, level + 1)?;
            if i + 1 < nodes.len() {
                self.out.push(',');
            }
            self.out.push('\n');
        }
        self.pad(level);
        self.out.push(']');
        Ok(())
    }

    fn write_node(&mut self, node: &RouteNode, level: usize) -> Result<()> {
        let field = level + 1;

        self.out.push_str("{\n");
        self.write_json_field("path", &Value::String(node.path.clone()), field)?;
        self.write_json_field("name", &Value::String(node.name.clone()), field)?;
        self.write_json_field("meta", &Value::Object(node.meta.clone()), field)?;

        let specifier = serde_json::to_string(node.component.specifier())?;
        self.pad(field);
        self.out.push_str(&format!("component: () => import({}),\n", specifier));

        if let Some(before_enter) = &node.before_enter {
            self.write_json_field("beforeEnter", before_enter, field)?;
        }
        if let Some(redirect) = &node.redirect {
            self.write_json_field("redirect", redirect, field)?;
        }

        self.pad(field);
        self.out.push_str("children: ");
        self.write_nodes(&node.children, field)?;
        self.out.push('\n');

        self.pad(level);
        self.out.push('}');
        Ok(())
    }

    /// `key: <json>,` with nested lines re-indented to `level`
    fn write_json_field(&mut self, key: &str, value: &Value, level: usize) -> Result<()> {
        let json = to_pretty_json(value, &self.indent)?;
        let continuation = format!("\n{}", self.indent.repeat(level));

        self.pad(level);
        self.out.push_str(key);
        self.out.push_str(": ");
        self.out.push_str(&json.replace('\n', &continuation));
        self.out.push_str(",\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use viewtree_router::{build_routes, RawDiscovery, RouteOptions};

    fn sample() -> Vec<RouteNode> {
        let meta = match json!({ "title": "News", "redirect": "/news/latest" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let discovered = vec![
            RawDiscovery::new("/src/views/news/index.vue").with_meta(meta),
            RawDiscovery::new("/src/views/news/latest/index.vue"),
        ];
        build_routes(&discovered, &RouteOptions::default()).unwrap()
    }

    #[test]
    fn test_render_js_module() {
        let rendered = render(&sample(), OutputFormat::Js, 2).unwrap();
        let expected = r#"export const routes = [
  {
    path: "/news",
    name: "news",
    meta: {
      "title": "News"
    },
    component: () => import("/src/views/news/index.vue"),
    redirect: "/news/latest",
    children: [
      {
        path: "latest",
        name: "newsLatest",
        meta: {},
        component: () => import("/src/views/news/latest/index.vue"),
        children: []
      }
    ]
  }
]
"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_json_round_trips() {
        let forest = sample();
        let rendered = render(&forest, OutputFormat::Json, 4).unwrap();

        assert!(rendered.contains("\n    {\n        \"path\": \"/news\""));
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, serde_json::to_value(&forest).unwrap());
    }

    #[test]
    fn test_render_empty_forest() {
        assert_eq!(render(&[], OutputFormat::Js, 4).unwrap(), "export const routes = []\n");
        assert_eq!(render(&[], OutputFormat::Json, 4).unwrap(), "[]\n");
    }
}
