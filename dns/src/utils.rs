use crate::{Error, Result, MAX_LABEL_LEN, MAX_NAME_LEN};

/// Renders a wire-format name as dotted text. The root name renders as `.`.
///
/// Stops at the first zero-length label, or quietly at a label that runs past
/// the end of `name`.
pub fn name_to_dotted(name: &[u8]) -> String {
    let mut labels = Vec::new();

    let mut index = 0;
    while index < name.len() {
        let label_len: usize = name[index] as usize;

        if label_len == 0 {
            break;
        }

        let label_begin_index = index + 1;
        let next_index = label_begin_index + label_len;

        let label_bytes = match name.get(label_begin_index..next_index) {
            Some(bytes) => bytes,
            None => break,
        };

        let label = String::from_utf8_lossy(label_bytes).to_string();
        labels.push(label);

        index = next_index
    }

    if labels.is_empty() {
        return String::from(".");
    }

    labels.join(".")
}

/// Encodes dotted text into an uncompressed wire-format name.
///
/// A trailing dot is accepted, `""` and `"."` both give the root name.
pub fn domain_to_name(domain: &str) -> Result<Vec<u8>> {
    let mut name: Vec<u8> = Vec::with_capacity(domain.len() + 2);

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if !domain.is_empty() {
        for label in domain.split('.') {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(Error::InvalidName);
            }

            name.push(label.len() as u8);
            name.extend_from_slice(label.as_bytes());
        }
    }

    name.push(0);

    if name.len() > MAX_NAME_LEN {
        return Err(Error::Overflow);
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_to_dotted_test() {
        let name = [5, 98, 97, 105, 100, 117, 3, 99, 111, 109, 0];
        assert_eq!(name_to_dotted(&name), "baidu.com");

        assert_eq!(name_to_dotted(&[0]), ".");
        assert_eq!(name_to_dotted(&[]), ".");

        // truncated second label is dropped
        assert_eq!(name_to_dotted(&[1, b'a', 9, b'b']), "a");
    }

    #[test]
    fn domain_to_name_test() {
        let expected = vec![5, 98, 97, 105, 100, 117, 3, 99, 111, 109, 0];
        assert_eq!(domain_to_name("baidu.com"), Ok(expected.clone()));
        assert_eq!(domain_to_name("baidu.com."), Ok(expected));

        assert_eq!(domain_to_name(""), Ok(vec![0]));
        assert_eq!(domain_to_name("."), Ok(vec![0]));
    }

    #[test]
    fn domain_to_name_rejects_test() {
        assert_eq!(domain_to_name("a..com"), Err(Error::InvalidName));
        assert_eq!(domain_to_name(".com"), Err(Error::InvalidName));

        let long_label = "a".repeat(64);
        assert_eq!(domain_to_name(&long_label), Err(Error::InvalidName));

        let long_name = vec!["a".repeat(63); 4].join(".");
        assert_eq!(domain_to_name(&long_name), Err(Error::Overflow));
    }
}
