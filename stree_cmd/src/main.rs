use std::fmt;
use std::fs;
use std::io::{self, Write};

use docopt::Docopt;
use log::info;
use serde::Deserialize;
use ukkonen::{Edge, SuffixTree};

static USAGE: &str = "
Build a suffix tree over <text> and report, for each <pattern>, whether it
occurs in <text>. With no patterns, the tree itself is printed.

Usage:
    stree [options] <text> [<pattern> ...]
    stree -h | --help

Options:
    -f, --file          Treat <text> as a path and index the file contents.
    -d, --dot           Write the tree in GraphViz's dot format.
    -s, --stats         Print construction statistics.
    -h, --help          Show this usage message.
";

#[derive(Deserialize)]
struct Args {
    arg_text: String,
    arg_pattern: Vec<String>,
    flag_file: bool,
    flag_dot: bool,
    flag_stats: bool,
}

type CliResult<T> = Result<T, Error>;

enum Error {
    Io(io::Error),
    Other(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Error {
        Error::Other(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref err) => err.fmt(f),
            Error::Other(ref s) => write!(f, "{}", s),
        }
    }
}

fn main() {
    env_logger::init();
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    if let Err(err) = args.run() {
        let _ = writeln!(&mut io::stderr(), "{}", err);
        ::std::process::exit(1);
    }
}

impl Args {
    fn run(&self) -> CliResult<()> {
        let text = self.text()?;
        let st = SuffixTree::new(text.chars());
        info!(
            "indexed {} chars into {} nodes",
            st.len(),
            st.node_count()
        );

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.flag_stats {
            print_stats(&mut out, &st)?;
        }
        if self.flag_dot {
            print_dot_tree(&mut out, &st, &text)?;
        }
        for pattern in &self.arg_pattern {
            let found = st.contains(pattern.chars());
            let answer = if found { "found" } else { "not found" };
            writeln!(out, "{}\t{}", pattern, answer)?;
        }
        if !self.flag_stats && !self.flag_dot && self.arg_pattern.is_empty() {
            write!(out, "{:?}", st)?;
        }
        Ok(())
    }

    fn text(&self) -> CliResult<String> {
        if !self.flag_file {
            return Ok(self.arg_text.clone());
        }
        let bytes = fs::read(&self.arg_text)?;
        let text = String::from_utf8(bytes).map_err(|_| {
            format!("{}: file is not valid UTF-8", self.arg_text)
        })?;
        Ok(text.trim_end_matches(&['\n', '\r'][..]).to_owned())
    }
}

fn print_stats<W: Write>(out: &mut W, st: &SuffixTree<char>) -> io::Result<()> {
    let stats = st.stats();
    writeln!(out, "length:       {}", st.len())?;
    writeln!(out, "nodes:        {}", st.node_count())?;
    writeln!(out, "phases:       {}", stats.phases)?;
    writeln!(out, "steps:        {}", stats.steps)?;
    writeln!(out, "leaves:       {}", stats.leaves)?;
    writeln!(out, "splits:       {}", stats.splits)?;
    writeln!(out, "skips:        {}", stats.skips)?;
    writeln!(out, "showstoppers: {}", stats.showstoppers)?;
    Ok(())
}

fn print_dot_tree<W: Write>(
    out: &mut W,
    st: &SuffixTree<char>,
    text: &str,
) -> io::Result<()> {
    writeln!(out, "digraph tree {{")?;
    writeln!(out, "label=<<FONT POINT-SIZE=\"20\">{}</FONT>>;", html(text))?;
    writeln!(out, "labelloc=\"t\";")?;
    writeln!(out, "labeljust=\"l\";")?;
    for id in st.preorder() {
        let node = st.node(id);
        match node.suffix() {
            Some(start) => {
                writeln!(out, "{} [label=\"{}\", shape=box]", id, start)?
            }
            None => writeln!(out, "{} [label=\"\"]", id)?,
        }
        for edge in node.edges() {
            writeln!(
                out,
                "{} -> {} [label=\"{}\"];",
                id,
                edge.target(),
                label(st, edge)
            )?;
        }
        if let Some(link) = node.suffix_link() {
            writeln!(out, "{} -> {} [style=dotted];", id, link)?;
        }
    }
    writeln!(out, "}}")
}

fn label(st: &SuffixTree<char>, edge: &Edge) -> String {
    let mut s = String::new();
    for sym in st.label(edge) {
        match sym.as_char() {
            Some(&'"') => s.push_str("\\\""),
            Some(&'\\') => s.push_str("\\\\"),
            Some(&c) => s.push(c),
            None => s.push('$'),
        }
    }
    s
}

fn html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
