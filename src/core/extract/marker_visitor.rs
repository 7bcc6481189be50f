//! AST visitor that collects marker usages.
//!
//! Two shapes are recognized, both bound to the configured marker identifier:
//!
//! - calls: `a18n("Save")` produces a static text
//! - tagged templates: ``a18n`Hello ${name}!` `` produces an interpolated text
//!
//! Everything else is ordinary code. Its children are still visited, since
//! marker usages can be nested anywhere (including inside other usages).

use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, TaggedTpl};
use swc_ecma_visit::{Visit, VisitWith};

use super::text_builder::TextBuilder;
use crate::core::SourceText;
use crate::core::parsers::ParsedSource;
use crate::issues::{ExtractError, ExtractErrorKind};

/// Syntax node kinds the visitor cares about.
#[derive(Clone, Copy)]
enum MarkerNode<'n> {
    Call(&'n CallExpr),
    Template(&'n TaggedTpl),
}

/// Collects marker texts from a module in pre-order.
///
/// The first invalid marker call stops collection; `finish` then returns the
/// error and drops whatever was collected before it.
pub struct MarkerVisitor<'a> {
    marker: &'a str,
    file_path: &'a str,
    parsed: &'a ParsedSource,
    builder: TextBuilder<'a>,
    texts: Vec<SourceText>,
    error: Option<ExtractError>,
}

impl<'a> MarkerVisitor<'a> {
    pub fn new(
        marker: &'a str,
        file_path: &'a str,
        parsed: &'a ParsedSource,
        code: &'a str,
    ) -> Self {
        Self {
            marker,
            file_path,
            parsed,
            builder: TextBuilder::new(file_path, code),
            texts: Vec::new(),
            error: None,
        }
    }

    /// Texts in traversal order, or the error that aborted traversal.
    pub fn finish(self) -> Result<Vec<SourceText>, ExtractError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.texts),
        }
    }

    fn enter(&mut self, node: MarkerNode<'_>) {
        if let Err(err) = self.collect(node) {
            self.error = Some(err);
        }
    }

    fn collect(&mut self, node: MarkerNode<'_>) -> Result<(), ExtractError> {
        match node {
            MarkerNode::Call(call) if self.is_marker_callee(&call.callee) => {
                let text = self.static_argument(call)?;
                let location = self.parsed.location(call.span);
                self.texts.push(self.builder.static_text(text, location));
            }
            MarkerNode::Template(tagged) if self.is_marker(&tagged.tag) => {
                let text_parts = tagged
                    .tpl
                    .quasis
                    .iter()
                    .map(|quasi| normalize_line_endings(&quasi.raw))
                    .collect();
                let location = self.parsed.location(tagged.span);
                self.texts.push(self.builder.interpolated_text(text_parts, location));
            }
            _ => {}
        }
        Ok(())
    }

    fn is_marker_callee(&self, callee: &Callee) -> bool {
        matches!(callee, Callee::Expr(expr) if self.is_marker(expr))
    }

    fn is_marker(&self, expr: &Expr) -> bool {
        matches!(unwrap_paren(expr), Expr::Ident(ident) if ident.sym.as_str() == self.marker)
    }

    /// The single string literal argument of a marker call.
    fn static_argument(&self, call: &CallExpr) -> Result<String, ExtractError> {
        if let [arg] = call.args.as_slice()
            && arg.spread.is_none()
            && let Expr::Lit(Lit::Str(s)) = unwrap_paren(&arg.expr)
        {
            let value = match s.value.as_str() {
                Some(value) => value.to_string(),
                // Lone surrogates cannot be represented in UTF-8.
                None => s.value.to_string_lossy().into_owned(),
            };
            return Ok(value);
        }

        Err(ExtractError::new(
            self.file_path,
            self.parsed.location(call.span),
            ExtractErrorKind::InvalidMarkerCall {
                marker: self.marker.to_string(),
                received: call.args.iter().map(argument_kind).collect(),
            },
        ))
    }
}

impl Visit for MarkerVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.error.is_some() {
            return;
        }
        self.enter(MarkerNode::Call(node));
        node.visit_children_with(self);
    }

    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        if self.error.is_some() {
            return;
        }
        self.enter(MarkerNode::Template(node));
        node.visit_children_with(self);
    }
}

/// Template raw text reads `\r\n` and `\r` as `\n`, so CRLF and LF checkouts agree.
fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// `(("x"))` is still a string literal and `(a18n)` still the marker;
/// TS casts like `"x" as string` are not unwrapped.
fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        _ => expr,
    }
}

fn argument_kind(arg: &ExprOrSpread) -> &'static str {
    if arg.spread.is_some() {
        "SpreadElement"
    } else {
        expr_kind(unwrap_paren(&arg.expr))
    }
}

/// ESTree node name for an expression, as shown in error messages.
fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Lit(lit) => match lit {
            Lit::Str(_) => "StringLiteral",
            Lit::Num(_) => "NumericLiteral",
            Lit::Bool(_) => "BooleanLiteral",
            Lit::Null(_) => "NullLiteral",
            Lit::BigInt(_) => "BigIntLiteral",
            Lit::Regex(_) => "RegExpLiteral",
            _ => "Literal",
        },
        Expr::Ident(_) => "Identifier",
        Expr::This(_) => "ThisExpression",
        Expr::Array(_) => "ArrayExpression",
        Expr::Object(_) => "ObjectExpression",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Arrow(_) => "ArrowFunctionExpression",
        Expr::Class(_) => "ClassExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Member(_) => "MemberExpression",
        Expr::Cond(_) => "ConditionalExpression",
        Expr::Call(_) => "CallExpression",
        Expr::New(_) => "NewExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::Tpl(_) => "TemplateLiteral",
        Expr::TaggedTpl(_) => "TaggedTemplateExpression",
        Expr::Await(_) => "AwaitExpression",
        Expr::Yield(_) => "YieldExpression",
        Expr::OptChain(_) => "OptionalExpression",
        Expr::JSXElement(_) => "JSXElement",
        Expr::JSXFragment(_) => "JSXFragment",
        Expr::TsAs(_) => "TSAsExpression",
        Expr::TsSatisfies(_) => "TSSatisfiesExpression",
        Expr::TsNonNull(_) => "TSNonNullExpression",
        Expr::TsTypeAssertion(_) => "TSTypeAssertion",
        Expr::TsConstAssertion(_) => "TSAsExpression",
        _ => "Expression",
    }
}
