//! Destination file rendering

use crate::{package_path, ImportSynthesizer, SynthesizerConfig, SynthesizerError};
use regroup_domain::{ArtifactKey, Block, DestinationDocument};
use std::collections::BTreeSet;

/// Renders the destination file of one artifact
#[derive(Debug, Clone)]
pub struct FileSynthesizer {
    config: SynthesizerConfig,
    imports: ImportSynthesizer,
}

impl FileSynthesizer {
    /// Create a new FileSynthesizer with the given configuration
    pub fn new(config: SynthesizerConfig) -> Result<Self, SynthesizerError> {
        config.validate().map_err(SynthesizerError::Config)?;
        let imports = ImportSynthesizer::from_config(&config);
        Ok(Self { config, imports })
    }

    /// Get the synthesizer configuration
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Output path of `key`, relative to the destination root
    pub fn relative_path(&self, key: &ArtifactKey) -> String {
        format!(
            "{}/{}{}.{}",
            key.category, key.artifact, self.config.container_suffix, self.config.extension
        )
    }

    /// Render `blocks`, in order, into the destination of `key`
    ///
    /// Block bodies are copied verbatim; only the declaration lines get the
    /// configured indent.
    pub fn synthesize(
        &self,
        key: &ArtifactKey,
        blocks: &[Block],
    ) -> Result<DestinationDocument, SynthesizerError> {
        let cfg = &self.config;
        let package = package_path(&cfg.package_root, &key.category);

        let artifact_imports = [
            format!("{}.{}", package, key.artifact),
            format!("{}.{}{}", package, cfg.factory_verb, key.artifact),
        ];

        // Signatures are rendered too, so `= runTest` counts as usage.
        let aggregated: String = blocks
            .iter()
            .flat_map(|b| [b.signature.as_str(), b.body.as_str()])
            .collect::<Vec<_>>()
            .join("\n");
        let detected = self.imports.synthesize(&aggregated);

        let mut lines: Vec<String> = Vec::new();
        if !cfg.header.is_empty() {
            lines.push(cfg.header.trim_end().to_string());
        }
        lines.push(format!("package {}", package));
        lines.push(String::new());
        for import in artifact_imports
            .iter()
            .chain(detected.iter().filter(|i| !artifact_imports.contains(*i)))
        {
            lines.push(format!("import {}", import));
        }
        lines.push(String::new());
        lines.push("/**".to_string());
        lines.push(format!(" * {}", cfg.doc_for(&key.artifact)));
        lines.push(" */".to_string());
        lines.push(format!(
            "class {}{} {}",
            key.artifact, cfg.container_suffix, cfg.delimiters.open
        ));
        lines.push(String::new());
        for block in blocks {
            lines.push(format!("{}{}", cfg.indent, cfg.unit_marker));
            lines.push(self.declaration(block));
            lines.push(String::new());
        }
        lines.push(cfg.delimiters.close.to_string());

        let mut text = lines.join("\n");
        text.push('\n');

        let (open, close) = cfg.delimiters.counts(&text);
        if open != close {
            return Err(SynthesizerError::Unbalanced {
                artifact: key.artifact.clone(),
                open,
                close,
            });
        }

        let mut imports: BTreeSet<String> = detected;
        imports.extend(artifact_imports);

        Ok(DestinationDocument {
            artifact: key.clone(),
            header: cfg.header.clone(),
            package_path: package,
            imports,
            body_blocks: blocks.to_vec(),
            relative_path: self.relative_path(key),
            text,
        })
    }

    fn declaration(&self, block: &Block) -> String {
        let cfg = &self.config;
        let mut line = format!(
            "{}{} {q}{}{q}{}",
            cfg.indent,
            cfg.unit_keyword,
            block.name,
            block.signature,
            q = cfg.name_quote
        );
        line.push(' ');
        line.push_str(&block.body);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(name: &str, body: &str) -> Block {
        Block {
            name: name.to_string(),
            signature: "()".to_string(),
            body: body.to_string(),
            full_text: String::new(),
            grouping: None,
        }
    }

    #[test]
    fn test_layout() {
        let config = SynthesizerConfig {
            header: "// Copyright (C) 2025\n// SPDX-License-Identifier: Apache-2.0".to_string(),
            package_root: "com.example.scenarios".to_string(),
            ..SynthesizerConfig::default()
        };
        let synthesizer = FileSynthesizer::new(config).unwrap();
        let key = ArtifactKey::new("Foo", "1_basic");
        let destination = synthesizer
            .synthesize(&key, &[block("a", "{\n        assertTrue(x)\n    }")])
            .unwrap();

        let expected = "\
// Copyright (C) 2025
// SPDX-License-Identifier: Apache-2.0
package com.example.scenarios.basic

import com.example.scenarios.basic.Foo
import com.example.scenarios.basic.fakeFoo
import kotlin.test.Test
import kotlin.test.assertEquals
import kotlin.test.assertTrue

/**
 * Tests for Foo.
 */
class FooTest {

    @Test
    fun `a`() {
        assertTrue(x)
    }

}
";
        assert_eq!(destination.text, expected);
        assert_eq!(destination.package_path, "com.example.scenarios.basic");
        assert_eq!(destination.relative_path, "1_basic/FooTest.kt");
        assert_eq!(destination.imports.len(), 5);
        assert_eq!(destination.block_count(), 1);
    }

    #[test]
    fn test_empty_header_is_omitted() {
        let synthesizer = FileSynthesizer::new(SynthesizerConfig::default()).unwrap();
        let destination = synthesizer
            .synthesize(&ArtifactKey::new("Foo", "basic"), &[block("a", "{ }")])
            .unwrap();
        assert!(destination.text.starts_with("package com.example.tests.basic\n"));
    }

    #[test]
    fn test_signature_is_preserved() {
        let synthesizer = FileSynthesizer::new(SynthesizerConfig::default()).unwrap();
        let mut b = block("async", "{ delay(1) }");
        b.signature = "() = runTest".to_string();
        let destination = synthesizer
            .synthesize(&ArtifactKey::new("Foo", "basic"), &[b])
            .unwrap();
        assert!(destination
            .text
            .contains("    fun `async`() = runTest { delay(1) }\n"));
        assert!(destination.imports.contains("kotlinx.coroutines.test.runTest"));
    }

    #[test]
    fn test_unbalanced_body_is_rejected() {
        let synthesizer = FileSynthesizer::new(SynthesizerConfig::default()).unwrap();
        let err = synthesizer
            .synthesize(&ArtifactKey::new("Foo", "basic"), &[block("a", "{ {")])
            .unwrap_err();
        assert_eq!(
            err,
            SynthesizerError::Unbalanced {
                artifact: "Foo".to_string(),
                open: 3,
                close: 1
            }
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SynthesizerConfig {
            package_root: String::new(),
            ..SynthesizerConfig::default()
        };
        assert!(matches!(
            FileSynthesizer::new(config),
            Err(SynthesizerError::Config(_))
        ));
    }
}
