use std::collections::HashSet;
use std::path::Path;

const KNOWN_SEMANTICS: [&str; 3] = ["zygosity", "allele_length", "descriptive"];

fn main() {
    let catalog_path = Path::new("catalogs/dog_loci.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the locus catalog before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let loci = catalog.get("loci").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'loci' field\n\
             The catalog must have a top-level 'loci' array.\n"
        );
    });

    let entries = loci.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'loci' must be an array\n\
             Got: {loci}\n"
        );
    });

    let total_codes = validate_entries(entries);

    println!(
        "cargo:warning=Validated locus catalog: {} loci, {total_codes} genotype codes",
        entries.len()
    );
}

fn validate_entries(entries: &[serde_json::Value]) -> usize {
    let mut seen = HashSet::new();
    let mut total_codes = 0;

    for (i, entry) in entries.iter().enumerate() {
        let locus = entry
            .get("locus")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Entry at index {i} missing 'locus' field\n")
            });

        assert!(
            seen.insert(locus.to_string()),
            "\n\nCATALOG BUILD ERROR: Locus '{locus}' (index {i}) is listed twice\n"
        );

        let semantics = entry.get("semantics").and_then(|v| v.as_str());
        assert!(
            semantics.is_some_and(|s| KNOWN_SEMANTICS.contains(&s)),
            "\n\nCATALOG BUILD ERROR: Locus '{locus}' has missing or unknown 'semantics'\n\
             Expected one of: {KNOWN_SEMANTICS:?}\n"
        );

        total_codes += validate_codes(entry, locus);
    }

    total_codes
}

fn validate_codes(entry: &serde_json::Value, locus: &str) -> usize {
    let codes = entry
        .get("codes")
        .and_then(|c| c.as_array())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Locus '{locus}' missing 'codes' array\n")
        });

    assert!(
        !codes.is_empty(),
        "\n\nCATALOG BUILD ERROR: Locus '{locus}' has an empty 'codes' array\n"
    );

    for (j, code) in codes.iter().enumerate() {
        let text = code.as_str().unwrap_or("");
        assert!(
            !text.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Locus '{locus}' code {j} is empty or not a string\n"
        );
    }

    codes.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/dog_loci.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
