// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let mut content = String::from(
        "---\ntitle: Azure Functions with Python\ndescription: Build functions in python\nms.date: 01/02/2021\n---\n# Azure Functions with Python\n\nThis article introduces python on Azure Functions.\n\n",
    );

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "Run `pip install azure-functions` and see [the python guide](https://example.com/python).\n\n",
        );
        content.push_str("```python\nimport azure.functions as func\n# python comment\n```\n\n");
        content.push_str("![python logo](media/python.png)\n\n");
    }

    content
}
