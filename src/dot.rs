use std::fmt::{Display, Formatter, Result};

use crate::node::{Color, Node};

/// Renders the subtree rooted at the wrapped node as a Graphviz `digraph`.
pub(crate) struct Dot<'a, K, V>(pub(crate) Option<&'a Node<K, V>>);

impl<K, V> Display for Dot<'_, K, V>
where
    K: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"bgcolor = "transparent";"#)?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = white;];"#
        )?;
        if let Some(n) = self.0 {
            recurse(n, f)?;
        }
        writeln!(f, "}}")
    }
}

fn recurse<K, V>(n: &Node<K, V>, f: &mut Formatter<'_>) -> Result
where
    K: Display,
{
    let fill = match n.color() {
        Color::Red => "red",
        Color::Black => "black",
    };

    let id = escape_id(n.key());
    writeln!(
        f,
        r#""{}" [label="{} | size={}"; fillcolor = {};];"#,
        id,
        escape_label(&id),
        n.size(),
        fill,
    )?;

    for (side, v) in [("l", n.left()), ("r", n.right())] {
        match v {
            Some(v) => {
                writeln!(f, r#""{}" -> "{}";"#, id, escape_id(v.key()))?;
                recurse(v, f)?;
            }
            None => {
                writeln!(f, r#""null_{id}_{side}" [shape=point,style=invis];"#)?;
                writeln!(f, r#""{id}" -> "null_{id}_{side}" [style=invis];"#)?;
            }
        };
    }

    Ok(())
}

/// Render `key` for use inside a double-quoted DOT ID.
fn escape_id<K: Display>(key: &K) -> String {
    key.to_string().replace('"', r#"\""#)
}

/// Escape the characters that delimit fields of a `record` shape label.
fn escape_label(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
