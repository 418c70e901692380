use bemforge_model::{resolve_class_name, Element, ElementIndex, Forest};
use tracing::debug;

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Indentation added per nesting level
    pub indent: String,
    /// Tag used when an element has none or hides it
    pub fallback_tag: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            fallback_tag: "div".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a CompileOptions,
    default_block: &'a str,
    index: ElementIndex<'a>,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(forest: &'a Forest, default_block: &'a str, options: &'a CompileOptions) -> Self {
        Self {
            options,
            default_block,
            index: forest.index(),
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a forest to HTML with default options
pub fn compile_to_html(forest: &Forest, default_block: &str) -> String {
    compile_to_html_with(forest, default_block, &CompileOptions::default())
}

/// Compile a forest to HTML.
///
/// One line per opening tag; childless elements close on the same line.
/// Roots are newline separated and there is no trailing newline.
pub fn compile_to_html_with(forest: &Forest, default_block: &str, options: &CompileOptions) -> String {
    let mut ctx = Context::new(forest, default_block, options);
    compile_siblings(forest.roots(), &mut ctx);

    let html = ctx.get_output();
    debug!(elements = forest.node_count(), bytes = html.len(), "Compiled HTML");
    html
}

fn compile_siblings<E: AsRef<Element>>(elements: &[E], ctx: &mut Context<'_>) {
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            ctx.add("\n");
        }
        compile_element(element.as_ref(), ctx);
    }
}

fn compile_element(element: &Element, ctx: &mut Context<'_>) {
    let tag = element.effective_tag(&ctx.options.fallback_tag).to_string();
    let class_name = resolve_class_name(element, ctx.default_block, Some(&ctx.index));

    ctx.add_indent();
    ctx.add(&format!("<{}", tag));
    ctx.add(&format!(" class=\"{}\"", class_name));
    compile_attributes(element, ctx);
    ctx.add(">");
    ctx.add(&element.text);

    if element.has_children() {
        ctx.add("\n");
        ctx.indent();
        compile_siblings(&element.children, ctx);
        ctx.dedent();
        ctx.add("\n");
        ctx.add_indent();
    }

    ctx.add(&format!("</{}>", tag));
}

/// Custom attributes follow `class`. They are dropped along with the tag
/// when the tag is hidden.
fn compile_attributes(element: &Element, ctx: &mut Context<'_>) {
    if element.hide_html_tag {
        return;
    }
    for (name, value) in element.html_attributes.iter() {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("class") {
            continue;
        }
        ctx.add(&format!(" {}=\"{}\"", name, value));
    }
}
