use std::io::{BufRead, Write};

use colored::Colorize;
use electra_catalog::{Brand, Catalog, CatalogRepository, Item};

use crate::input::{prompt_line, prompt_number};

const MENU: &str = "\
1. Add brand
2. Add television
3. Add mobile
4. List brands
5. List items
6. Exit";

/// Drive the interactive loop until the operator exits. Reader and writer are
/// injected so whole sessions can be scripted in tests; the catalog itself
/// stays free of console concerns.
pub fn run<R, W>(
    mut catalog: Catalog,
    repository: &dyn CatalogRepository,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(writer)?;
        writeln!(writer, "{}", "Electronics Inventory".bold())?;
        writeln!(writer, "{MENU}")?;
        write!(writer, "Select an option: ")?;
        writer.flush()?;

        let Some(choice) = read_line(reader)? else {
            tracing::debug!("input stream closed, leaving menu loop");
            break;
        };
        match choice.as_str() {
            "1" => add_brand(&mut catalog, reader, writer)?,
            "2" => add_television(&mut catalog, reader, writer)?,
            "3" => add_mobile(&mut catalog, reader, writer)?,
            "4" => list_brands(&catalog, writer)?,
            "5" => list_items(&catalog, writer)?,
            "6" => {
                save(&catalog, repository, writer)?;
                break;
            }
            _ => writeln!(
                writer,
                "{}",
                "Invalid option. Choose an option from the menu.".red()
            )?,
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_brand<R, W>(catalog: &mut Catalog, reader: &mut R, writer: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let name = prompt_line("Brand name: ", reader, writer)?;
    let country = prompt_line("Country: ", reader, writer)?;
    let revenue: f64 = prompt_number("Revenue: ", reader, writer)?;

    match catalog.add_brand(Brand::new(name, country, revenue)) {
        Ok(()) => writeln!(writer, "{}", "Brand added.".green())?,
        Err(err) => writeln!(writer, "{}", err.to_string().red())?,
    }
    Ok(())
}

fn add_television<R, W>(catalog: &mut Catalog, reader: &mut R, writer: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(brand_name) = resolve_brand(catalog, reader, writer)? else {
        return Ok(());
    };
    let name = prompt_line("Television name: ", reader, writer)?;
    let price: f64 = prompt_number("Price: ", reader, writer)?;
    let screen_size_inches: u32 = prompt_number("Screen size in inches: ", reader, writer)?;
    let screen_type = prompt_line("Screen type (LED, QLED, OLED, QNED): ", reader, writer)?;

    let item = Item::television(name, brand_name, price, screen_size_inches, screen_type);
    match catalog.add_item(item) {
        Ok(()) => writeln!(writer, "{}", "Television added.".green())?,
        Err(err) => writeln!(writer, "{}", err.to_string().red())?,
    }
    Ok(())
}

fn add_mobile<R, W>(catalog: &mut Catalog, reader: &mut R, writer: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(brand_name) = resolve_brand(catalog, reader, writer)? else {
        return Ok(());
    };
    let name = prompt_line("Mobile name: ", reader, writer)?;
    let price: f64 = prompt_number("Price: ", reader, writer)?;
    let ram_gb: u32 = prompt_number("RAM in GB: ", reader, writer)?;
    let operating_system = prompt_line("Operating system (Android, iOS): ", reader, writer)?;

    let item = Item::mobile(name, brand_name, price, ram_gb, operating_system);
    match catalog.add_item(item) {
        Ok(()) => writeln!(writer, "{}", "Mobile added.".green())?,
        Err(err) => writeln!(writer, "{}", err.to_string().red())?,
    }
    Ok(())
}

/// Ask for the brand before anything else; an unknown brand aborts the entry
/// without further prompting. Returns the stored brand's canonical name so
/// the item carries the registered casing.
fn resolve_brand<R, W>(
    catalog: &Catalog,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    let entered = prompt_line("Brand name: ", reader, writer)?;
    match catalog.find_brand(&entered) {
        Some(brand) => Ok(Some(brand.name.clone())),
        None => {
            writeln!(writer, "{}", "Brand not found. Add the brand first.".red())?;
            Ok(None)
        }
    }
}

fn list_brands<W: Write>(catalog: &Catalog, writer: &mut W) -> anyhow::Result<()> {
    let brands = catalog.brands_by_revenue();
    if brands.is_empty() {
        writeln!(writer, "No brands registered.")?;
        return Ok(());
    }
    for brand in brands {
        writeln!(writer, "{brand}")?;
    }
    Ok(())
}

fn list_items<W: Write>(catalog: &Catalog, writer: &mut W) -> anyhow::Result<()> {
    let items = catalog.items_in_listing_order();
    if items.is_empty() {
        writeln!(writer, "No items registered.")?;
        return Ok(());
    }
    for item in items {
        writeln!(writer, "{item}")?;
    }
    let summary = catalog.summary();
    writeln!(writer)?;
    writeln!(writer, "Item summary:")?;
    writeln!(writer, "Total televisions: {}", summary.televisions)?;
    writeln!(writer, "Total mobiles: {}", summary.mobiles)?;
    Ok(())
}

fn save<W: Write>(
    catalog: &Catalog,
    repository: &dyn CatalogRepository,
    writer: &mut W,
) -> anyhow::Result<()> {
    match repository.save(catalog) {
        Ok(()) => writeln!(writer, "{}", "Data saved successfully.".green())?,
        Err(err) => {
            tracing::error!(%err, "snapshot save failed");
            writeln!(writer, "{}", format!("Failed to save data: {err}").red())?;
        }
    }
    Ok(())
}
