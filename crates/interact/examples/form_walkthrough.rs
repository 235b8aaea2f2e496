//! Walk through every helper and print the resulting page

use dom::DomSerializer;
use interact::{
    is_error_shown, remove_element, simulate_click, simulate_form_submit, upsert_element, Page,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut page = Page::new();

    upsert_element(&mut page, "status", "loading")?;
    upsert_element(&mut page, "status", "ready")?;
    upsert_element(&mut page, "banner", "temporary")?;
    remove_element(&mut page, "banner")?;

    simulate_click(&mut page, "panel", "Thanks for clicking!")?;

    let form = simulate_form_submit(&mut page, "signup", "greeting")?;
    println!("Error shown after empty submit: {}", is_error_shown(&page, &form)?);

    page.document_mut().set_value(form.input, "hello")?;
    page.submit(form.form)?;
    println!("Error shown after typing: {}", is_error_shown(&page, &form)?);

    println!("{}", DomSerializer::new().serialize(page.document().arena())?);

    Ok(())
}
