//! Starter templates.
//!
//! The static set of selectable starter languages, each contributing one
//! seed file to a new workspace. Selections are fed through the same
//! hydrate path as load and import.

use crate::flat::FlatFile;

/// One selectable starter language with its seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub file_name: &'static str,
    pub file_content: &'static str,
}

pub const LANGUAGES: [Language; 9] = [
    Language {
        id: "html",
        name: "HTML5",
        description: "Web pages",
        file_name: "index.html",
        file_content: "<!DOCTYPE html>\n<html>\n<body>\n  <h1>Hello, World!</h1>\n</body>\n</html>",
    },
    Language {
        id: "css",
        name: "CSS3",
        description: "Styling",
        file_name: "style.css",
        file_content: "body {\n  font-family: sans-serif;\n}",
    },
    Language {
        id: "js",
        name: "JavaScript",
        description: "Web logic",
        file_name: "script.js",
        file_content: "console.log('Hello, World!');",
    },
    Language {
        id: "ts",
        name: "TypeScript",
        description: "Typed JS",
        file_name: "main.ts",
        file_content: "const message: string = 'Hello, World!';\nconsole.log(message);",
    },
    Language {
        id: "python",
        name: "Python",
        description: "Scripting",
        file_name: "main.py",
        file_content: "def hello():\n    print(\"Hello, Python!\")\n\nhello()",
    },
    Language {
        id: "cpp",
        name: "C++",
        description: "Systems",
        file_name: "main.cpp",
        file_content: "#include <iostream>\n\nint main() {\n    std::cout << \"Hello, World!\" << std::endl;\n    return 0;\n}",
    },
    Language {
        id: "csharp",
        name: "C#",
        description: "Web & apps",
        file_name: "Program.cs",
        file_content: "System.Console.WriteLine(\"Hello, World!\");",
    },
    Language {
        id: "c",
        name: "C",
        description: "Low-level",
        file_name: "main.c",
        file_content: "#include <stdio.h>\n\nint main() {\n   printf(\"Hello, World!\");\n   return 0;\n}",
    },
    Language {
        id: "rust",
        name: "Rust",
        description: "Performance",
        file_name: "main.rs",
        file_content: "fn main() {\n    println!(\"Hello, World!\");\n}",
    },
];

/// Look up a starter language by id.
pub fn language(id: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.id == id)
}

/// Seed files for the selected language ids. Unknown ids are ignored; an
/// empty selection yields an empty project.
pub fn starter_files(language_ids: &[&str]) -> Vec<FlatFile> {
    LANGUAGES
        .iter()
        .filter(|lang| language_ids.contains(&lang.id))
        .map(|lang| FlatFile::new(lang.file_name, lang.file_content))
        .collect()
}
