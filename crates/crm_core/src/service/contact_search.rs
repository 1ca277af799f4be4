//! Free-text filter for the contacts table.

use crate::model::contact::Contact;

/// Contacts whose name, email, company or any tag contains `query`
/// (case-insensitive). An empty query keeps every contact.
pub fn search_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let needle = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| matches_query(contact, &needle))
        .collect()
}

fn matches_query(contact: &Contact, needle: &str) -> bool {
    [&contact.name, &contact.email, &contact.company]
        .into_iter()
        .chain(contact.tags.iter())
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::search_contacts;
    use crate::model::sample::sample_contacts;

    #[test]
    fn empty_query_keeps_everything() {
        let contacts = sample_contacts();
        assert_eq!(search_contacts(&contacts, "").len(), contacts.len());
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let contacts = sample_contacts();
        let by_company = search_contacts(&contacts, "GLOBEX");
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].name, "James Rodriguez");

        let by_tag = search_contacts(&contacts, "biotech");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, "c7");

        assert!(search_contacts(&contacts, "nobody-here").is_empty());
    }
}
