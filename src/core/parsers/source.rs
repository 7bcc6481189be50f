use std::{path::Path, sync::Arc};

use swc_common::{FileName, GLOBALS, Globals, SourceMap, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::SourceLocation;
use crate::issues::{ExtractError, ExtractErrorKind};

/// A parsed source file together with the source map used to resolve positions.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

impl ParsedSource {
    /// Walk the whole module with `visitor`.
    pub fn visit_with<V: Visit>(&self, visitor: &mut V) {
        self.module.visit_with(visitor);
    }

    /// Start position of `span`, or `None` for synthetic (dummy) spans.
    pub fn location(&self, span: Span) -> Option<SourceLocation> {
        span_location(&self.source_map, span)
    }
}

/// Pick the parser syntax from the file extension.
///
/// - `.ts` / `.mts` / `.cts`: TypeScript without JSX (so `<T>expr` casts parse)
/// - `.js` / `.jsx` / `.mjs` / `.cjs`: ECMAScript with JSX
/// - anything else (including `.tsx`): TypeScript with JSX
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let ext = Path::new(file_path).extension().and_then(|e| e.to_str());
    match ext {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        }),
        Some("js" | "jsx" | "mjs" | "cjs") => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
    }
}

/// Parse JavaScript/TypeScript source code into an AST.
///
/// Each call takes its own `SourceMap`, so files can be parsed on separate threads.
/// Errors the parser recovers from still fail the parse: extraction never works on
/// a partially understood file.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource, ExtractError> {
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser.parse_module().map_err(|e| {
            syntax_error(file_path, &source_map, e.span(), e.kind().msg().to_string())
        })?;

        if let Some(e) = parser.take_errors().into_iter().next() {
            return Err(syntax_error(
                file_path,
                &source_map,
                e.span(),
                e.kind().msg().to_string(),
            ));
        }

        Ok(ParsedSource { module, source_map })
    })
}

/// Resolve the start of `span` to a 1-indexed line and 0-indexed column.
///
/// The column counts Unicode scalar values, so a character outside the BMP
/// advances it by one (not two UTF-16 code units).
pub fn span_location(source_map: &SourceMap, span: Span) -> Option<SourceLocation> {
    if span.is_dummy() {
        return None;
    }
    let loc = source_map.lookup_char_pos(span.lo);
    Some(SourceLocation::new(loc.line, loc.col.0))
}

fn syntax_error(
    file_path: &str,
    source_map: &SourceMap,
    span: Span,
    message: String,
) -> ExtractError {
    ExtractError::new(
        file_path,
        span_location(source_map, span),
        ExtractErrorKind::Syntax { message },
    )
}
