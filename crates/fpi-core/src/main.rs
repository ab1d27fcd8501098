use clap::{value_parser, Arg, ArgAction, Command};
use fpi_cert::{CertificateGenerator, CertificateRecord, TextCertificateGenerator};
use fpi_config::{demo_catalog, PartConfig, PartStore};
use fpi_core::{InspectionSession, Role, SessionConfig, Worksheet};
use fpi_field::{FieldDefinition, FieldKind, FieldValue};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("fpi")
        .version("0.1.0")
        .about("First-Piece Inspection station core")
        .arg_required_else_help(false)
        .subcommand(
            Command::new("demo")
                .about("Run a scripted first-piece inspection")
                .arg(
                    Arg::new("part")
                        .long("part")
                        .default_value("PN-1042")
                        .help("Part number from the demo catalog"),
                )
                .arg(
                    Arg::new("lot")
                        .long("lot")
                        .default_value("LOT-240815")
                        .help("Lot label to scan"),
                )
                .arg(
                    Arg::new("reject")
                        .long("reject")
                        .action(ArgAction::SetTrue)
                        .help("Reject the lot instead of releasing it"),
                ),
        )
        .subcommand(
            Command::new("validate-part")
                .about("Validate a part catalog file")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help("Path to catalog JSON (demo catalog when omitted)"),
                ),
        )
        .subcommand(
            Command::new("certificate")
                .about("Render a sample certificate of conformance")
                .arg(
                    Arg::new("customer")
                        .long("customer")
                        .default_value("Acme Aerospace")
                        .help("Customer name"),
                )
                .arg(
                    Arg::new("part-number")
                        .long("part-number")
                        .default_value("PN-1042")
                        .help("Part number"),
                )
                .arg(
                    Arg::new("part-name")
                        .long("part-name")
                        .default_value("Pivot Bushing")
                        .help("Part name"),
                )
                .arg(
                    Arg::new("lot")
                        .long("lot")
                        .default_value("LOT-240815")
                        .help("Lot number"),
                )
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .default_value("250")
                        .value_parser(value_parser!(u32))
                        .help("Lot quantity"),
                )
                .arg(
                    Arg::new("inspector")
                        .long("inspector")
                        .default_value("R. Alvarez")
                        .help("Inspector of record"),
                ),
        )
        .subcommand(Command::new("parts").about("List the demo part catalog"));

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("demo", args)) => {
            let part_number = args.get_one::<String>("part").unwrap();
            let lot_label = args.get_one::<String>("lot").unwrap();
            let reject_demo = args.get_flag("reject");

            println!("FPI station demo");
            println!("Part: {}", part_number);
            println!("Lot scan: {}", lot_label);
            println!();

            let store = Arc::new(PartStore::in_memory());
            let Some(part) = store.get(part_number) else {
                println!("Part {} is not in the catalog", part_number);
                std::process::exit(2);
            };

            let mut session = InspectionSession::new(
                SessionConfig::new(Role::Inspector, "R. Alvarez"),
                Worksheet::part_driven(part.clone()),
            )
            .with_store(store);

            let lot = match session.scan_lot(lot_label).await {
                Ok(lot) => {
                    println!("Scanned lot {} (qty {})", lot.lot_number, lot.quantity);
                    lot
                }
                Err(e) => {
                    println!("Scan failed: {}", e);
                    std::process::exit(1);
                }
            };

            println!();
            for field in &part.fields {
                let value = demo_value(field);
                let rendered = value.render();
                match session.record_field(&field.id, Some(value)) {
                    Ok(Some(status)) => println!("  {}: {} -> {}", field.id, rendered, status),
                    Ok(None) => println!("  {}: not on this worksheet", field.id),
                    Err(e) => {
                        println!("  {}: refused ({})", field.id, e);
                        std::process::exit(1);
                    }
                }
            }

            let summary = session.summary();
            println!();
            println!(
                "Checklist: {} entries, {} passed, {} failed, {} pending",
                summary.total, summary.passed, summary.failed, summary.pending
            );
            println!();

            if reject_demo {
                match session.reject() {
                    Ok(()) => println!("Lot {} rejected for rework", lot_label),
                    Err(e) => {
                        println!("Reject refused: {}", e);
                        std::process::exit(1);
                    }
                }
                return;
            }

            match session.approve() {
                Ok(outcome) => {
                    println!("Lot released");
                    if let Some(certificate) = outcome.certificate {
                        println!();
                        println!("{}", certificate.content);
                    } else if let Some(reason) = outcome.certificate_error {
                        println!("Certificate did not render: {}", reason);
                    }
                }
                Err(e) => {
                    println!("Release refused: {}", e);
                    std::process::exit(1);
                }
            }

            let shipment = lot.quantity / 2;
            match session.ship(shipment) {
                Ok(()) => {
                    let remaining = session.shipments().map_or(0, |ledger| ledger.remaining());
                    println!();
                    println!("Shipped {} pieces ({} remaining)", shipment, remaining);
                }
                Err(e) => println!("Shipment refused: {}", e),
            }

            let kpis = session.kpis();
            println!();
            println!(
                "Shift KPIs: {} values recorded, {} lots released, {} shipped",
                kpis.values_recorded, kpis.lots_released, kpis.shipped
            );
        }
        Some(("validate-part", args)) => {
            let catalog: Vec<PartConfig> = if let Some(path) = args.get_one::<String>("path") {
                println!("Validating catalog at: {}", path);
                let raw = match std::fs::read_to_string(path) {
                    Ok(raw) => raw,
                    Err(e) => {
                        println!("Cannot read {}: {}", path, e);
                        std::process::exit(1);
                    }
                };
                match serde_json::from_str::<std::collections::BTreeMap<String, PartConfig>>(&raw)
                {
                    Ok(parsed) => parsed.into_values().collect(),
                    Err(e) => {
                        println!("Catalog does not parse: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("Validating demo catalog...");
                demo_catalog()
            };

            let mut invalid = 0usize;
            for part in &catalog {
                match part.validate() {
                    Ok(()) => println!(
                        "  {} rev {} ({} fields): OK",
                        part.part_number,
                        part.revision,
                        part.fields.len()
                    ),
                    Err(e) => {
                        invalid += 1;
                        println!("  {}: {}", part.part_number, e);
                    }
                }
            }

            println!();
            println!("{} parts checked, {} invalid", catalog.len(), invalid);
            std::process::exit(if invalid == 0 { 0 } else { 1 });
        }
        Some(("certificate", args)) => {
            let customer = args.get_one::<String>("customer").unwrap();
            let part_number = args.get_one::<String>("part-number").unwrap();
            let part_name = args.get_one::<String>("part-name").unwrap();
            let lot = args.get_one::<String>("lot").unwrap();
            let quantity = *args.get_one::<u32>("quantity").unwrap();
            let inspector = args.get_one::<String>("inspector").unwrap();

            let record =
                CertificateRecord::new(customer, part_number, part_name, lot, quantity, inspector);

            match TextCertificateGenerator::new().generate(&record) {
                Ok(document) => {
                    println!("{}", document.content);
                }
                Err(e) => {
                    println!("Certificate did not render: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(("parts", _)) => {
            println!("Demo part catalog");
            println!("=================");
            for part in demo_catalog() {
                println!();
                println!("{} rev {}: {}", part.part_number, part.revision, part.part_name);
                if let Some(customer) = &part.customer {
                    println!("  Customer: {}", customer);
                }
                for field in &part.fields {
                    let required = if field.required { " (required)" } else { "" };
                    println!("  - {} [{}]{}", field.name, field.kind.name(), required);
                }
            }
        }
        _ => {}
    }
}

/// Pick an in-tolerance demo value for a checklist field
fn demo_value(definition: &FieldDefinition) -> FieldValue {
    match &definition.kind {
        FieldKind::Numeric { min, max } => {
            let value = match (min, max) {
                (Some(min), Some(max)) => (min + max) / 2.0,
                (Some(min), None) => min + 0.1,
                (None, Some(max)) => max - 0.1,
                (None, None) => 1.0,
            };
            FieldValue::Number(value)
        }
        FieldKind::Checkbox => FieldValue::Check(true),
        FieldKind::Select { options } => {
            FieldValue::Choice(options.first().cloned().unwrap_or_default())
        }
    }
}
