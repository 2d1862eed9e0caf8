//! Shared fixtures for integration tests

#![allow(dead_code)]

use regex::Regex;

use xslt_playground::{EngineError, ParseOutcome, ResolvedParameters, TransformEngine};

pub const CATALOG_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
<xsl:param name="heading" select="'My CD Collection'"/>
<xsl:template match="/">
  <html>
  <body>
  <h2><xsl:value-of select="$heading"/></h2>
  <table border="1">
    <tr><th>Title</th><th>Artist</th></tr>
    <xsl:for-each select="catalog/cd">
    <tr>
      <td><xsl:value-of select="title"/></td>
      <td><xsl:value-of select="artist"/></td>
    </tr>
    </xsl:for-each>
  </table>
  </body>
  </html>
</xsl:template>
</xsl:stylesheet>
"#;

pub const CATALOG_SOURCE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<catalog>
  <cd>
    <title>Empire Burlesque</title>
    <artist>Bob Dylan</artist>
    <country>USA</country>
  </cd>
  <cd>
    <title>Hide your heart</title>
    <artist>Bonnie Tyler</artist>
    <country>UK</country>
  </cd>
  <cd>
    <title>Greatest Hits</title>
    <artist>Dolly Parton</artist>
    <country>USA</country>
  </cd>
</catalog>
"#;

/// Template missing the closing `>` of its root element
pub const BROKEN_TEMPLATE: &str =
    r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform""#;

/// Stand-in engine that only understands the catalog template
///
/// Parsing rejects text whose `<`/`>` do not pair up. Applying a template that
/// iterates `catalog/cd` emits one table row per `<cd>` in the source.
pub struct CatalogEngine;

impl TransformEngine for CatalogEngine {
    type Document = String;

    fn parse(&self, text: &str) -> Result<ParseOutcome<String>, EngineError> {
        let opens = text.matches('<').count();
        let closes = text.matches('>').count();
        if opens != closes {
            let line = text.lines().count();
            let column = text.lines().last().map(|l| l.chars().count()).unwrap_or(0) + 1;
            return Ok(ParseOutcome::Marker(format!(
                "unclosed tag at line {}, column {}",
                line, column
            )));
        }
        Ok(ParseOutcome::Parsed(text.to_string()))
    }

    fn apply_transform(
        &self,
        template: &String,
        source: &String,
        parameters: &ResolvedParameters,
    ) -> Result<String, EngineError> {
        if !template.contains(r#"<xsl:for-each select="catalog/cd">"#) {
            return Err(EngineError::new("no template matched the document root"));
        }

        let cd = Regex::new(r"(?s)<cd>(.*?)</cd>").unwrap();
        let title = Regex::new(r"<title>(.*?)</title>").unwrap();
        let artist = Regex::new(r"<artist>(.*?)</artist>").unwrap();

        let heading = parameters.get("heading").unwrap_or("My CD Collection");
        let mut out = format!(
            r#"<html><body><h2>{}</h2><table border="1"><tr><th>Title</th><th>Artist</th></tr>"#,
            heading
        );
        for entry in cd.captures_iter(source) {
            let body = &entry[1];
            let field = |re: &Regex| {
                re.captures(body)
                    .map(|c| c[1].to_string())
                    .unwrap_or_default()
            };
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                field(&title),
                field(&artist)
            ));
        }
        out.push_str("</table></body></html>");
        Ok(out)
    }

    fn serialize(&self, document: &String) -> Result<String, EngineError> {
        Ok(document.clone())
    }
}

/// Cell texts of every data row, in document order
pub fn data_rows(output: &str) -> Vec<(String, String)> {
    let row = Regex::new(r"<tr>\s*<td>(.*?)</td>\s*<td>(.*?)</td>\s*</tr>").unwrap();
    row.captures_iter(output)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect()
}
