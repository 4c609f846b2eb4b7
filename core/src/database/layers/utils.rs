use crate::database::{DatabaseCollection, Error as DbError};

const MAX_U64: usize = 17; // Max size u64

pub(crate) enum Element {
    N(u64),
    S(String),
}

fn get_u64_as_hexadecimal(value: u64) -> String {
    format!("{:0width$}", format!("{:016x}", value), width = MAX_U64)
}

fn element_to_string(element: &Element) -> String {
    match element {
        Element::N(n) => get_u64_as_hexadecimal(*n),
        Element::S(s) => s.to_string(),
    }
}

/// Joins the elements with `char::MAX`. Numbers are fixed width hexadecimal so
/// that lexicographic order matches numeric order.
pub(crate) fn get_key(key_elements: Vec<Element>) -> Result<String, DbError> {
    if key_elements.is_empty() {
        return Err(DbError::KeyElementsError);
    }
    Ok(key_elements
        .iter()
        .map(element_to_string)
        .collect::<Vec<String>>()
        .join(&char::MAX.to_string()))
}

/// Up to `quantity.abs()` values stored under `prefix`, starting after the
/// entry `from` (exclusive). A negative quantity walks backwards.
pub(crate) fn get_by_range<C: DatabaseCollection>(
    from: Option<String>,
    quantity: isize,
    collection: &C,
    prefix: &str,
) -> Result<Vec<(String, Vec<u8>)>, DbError> {
    let reverse = quantity < 0;
    let quantity = quantity.unsigned_abs();
    let mut iter = collection
        .iter(reverse, format!("{}{}", prefix, char::MAX))
        .peekable();
    if let Some(key) = from {
        loop {
            let Some((current_key, _)) = iter.peek() else {
                return Err(DbError::EntryNotFound);
            };
            if current_key == &key {
                break;
            }
            iter.next();
        }
        iter.next(); // Exclusive From
    }
    Ok(iter.take(quantity).collect())
}

#[cfg(test)]
mod tests {
    use super::{get_by_range, get_key, Element};
    use crate::database::{DatabaseCollection, DatabaseManager, Error, MemoryManager};

    #[test]
    fn test_numeric_keys_sort() {
        let low = get_key(vec![Element::S("log".into()), Element::N(2)]).unwrap();
        let high = get_key(vec![Element::S("log".into()), Element::N(16)]).unwrap();
        assert!(low < high);
        assert_eq!(get_key(vec![]), Err(Error::KeyElementsError));
    }

    #[test]
    fn test_range() {
        let manager = MemoryManager::new();
        let collection = manager.create_collection("range");
        for name in ["a", "b", "c", "d"] {
            let key = get_key(vec![Element::S("account".into()), Element::S(name.into())]).unwrap();
            collection.put(&key, name.as_bytes().to_vec()).unwrap();
        }
        let keys = |v: Vec<(String, Vec<u8>)>| v.into_iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(
            keys(get_by_range(None, 2, &collection, "account").unwrap()),
            vec!["a", "b"]
        );
        assert_eq!(
            keys(get_by_range(Some("b".into()), 10, &collection, "account").unwrap()),
            vec!["c", "d"]
        );
        assert_eq!(
            keys(get_by_range(Some("c".into()), -2, &collection, "account").unwrap()),
            vec!["b", "a"]
        );
        assert_eq!(
            get_by_range(Some("z".into()), 2, &collection, "account"),
            Err(Error::EntryNotFound)
        );
    }
}
